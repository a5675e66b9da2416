//! Confidence blending.
//!
//! Every verification starts from a neutral baseline and is adjusted by
//! whatever signals were actually gathered. Adjustments are applied to the
//! raw running value in a fixed order, and the result is clamped to
//! `[0.0, 1.0]` exactly once at the end, so consecutive deductions compound
//! instead of saturating one at a time.
//!
//! An absent signal adjusts nothing: a failed chain lookup is not evidence
//! against a decision, it is the absence of evidence for it.

use vouch_core::{
    ChainConfirmation, Confidence, MarketContext, MarketSentiment, TradeAction, TrustMetrics,
};

/// Neutral prior for a request carrying no usable signals.
pub const BASELINE_CONFIDENCE: f64 = 0.7;
/// Reward for a transaction confirmed on chain.
pub const CHAIN_CONFIRMED_BOOST: f64 = 0.2;
/// Penalty when the referenced transaction could not be found confirmed.
pub const CHAIN_UNCONFIRMED_PENALTY: f64 = 0.3;
/// Volatility above this is treated as a risk condition.
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 0.1;
pub const VOLATILITY_PENALTY: f64 = 0.1;
/// Liquidity below this is treated as a risk condition.
pub const LOW_LIQUIDITY_THRESHOLD: f64 = 0.5;
pub const LIQUIDITY_PENALTY: f64 = 0.1;
/// Buying into bearish sentiment costs a small deduction.
pub const BEARISH_BUY_PENALTY: f64 = 0.05;
/// Each risk issue raised degrades the compliance dimension by this much.
pub const COMPLIANCE_PENALTY_PER_ISSUE: f64 = 0.2;

/// Signals available for one blend, after adapter failures have already been
/// reduced to `None`.
#[derive(Debug, Clone, Copy)]
pub struct BlendInputs<'a> {
    /// Chain lookup outcome. `None` when the decision had no transaction or
    /// the lookup failed.
    pub chain: Option<&'a ChainConfirmation>,
    /// Market snapshot. `None` when no feed was available.
    pub market: Option<&'a MarketContext>,
    pub action: TradeAction,
}

/// What blending concluded: the clamped confidence, its complement, and the
/// risk issues raised along the way, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendOutcome {
    pub confidence: Confidence,
    pub risk_score: Confidence,
    /// Deduction-bearing findings only. Adapter advisories are appended by
    /// the engine after these.
    pub risk_issues: Vec<String>,
}

/// Blend available signals into a confidence score.
///
/// Evaluation order is fixed and observable through `risk_issues`: chain
/// confirmation, then volatility, then liquidity, then sentiment against the
/// trade direction.
pub fn blend(inputs: &BlendInputs<'_>) -> BlendOutcome {
    let mut confidence = BASELINE_CONFIDENCE;
    let mut risk_issues = Vec::new();

    if let Some(chain) = inputs.chain {
        if chain.verified {
            confidence += CHAIN_CONFIRMED_BOOST;
        } else {
            confidence -= CHAIN_UNCONFIRMED_PENALTY;
            risk_issues.push("Transaction not confirmed on blockchain".to_string());
        }
    }

    if let Some(market) = inputs.market {
        if market.volatility > HIGH_VOLATILITY_THRESHOLD {
            confidence -= VOLATILITY_PENALTY;
            risk_issues.push(format!("High market volatility: {:.2}", market.volatility));
        }
        if market.liquidity_score < LOW_LIQUIDITY_THRESHOLD {
            confidence -= LIQUIDITY_PENALTY;
            risk_issues.push(format!("Low liquidity score: {:.2}", market.liquidity_score));
        }
        if market.sentiment == MarketSentiment::Bearish && inputs.action == TradeAction::Buy {
            confidence -= BEARISH_BUY_PENALTY;
            risk_issues.push("Bearish market sentiment on a buy order".to_string());
        }
    }

    // Single clamp after all adjustments.
    let confidence = Confidence::new(confidence);
    BlendOutcome {
        confidence,
        risk_score: confidence.risk(),
        risk_issues,
    }
}

/// Expand a blend outcome into the per-dimension trust breakdown.
pub fn build_trust_metrics(
    outcome: &BlendOutcome,
    inputs: &BlendInputs<'_>,
    strategy_consistency: Confidence,
) -> TrustMetrics {
    let market_alignment = inputs
        .market
        .map(|m| Confidence::new(1.0 - m.volatility))
        .unwrap_or_default();

    let blockchain_verified = match inputs.chain {
        Some(chain) if chain.verified => Confidence::new(1.0),
        Some(_) => Confidence::new(0.0),
        None => Confidence::new(0.5),
    };

    TrustMetrics {
        overall: outcome.confidence,
        strategy_consistency,
        market_alignment,
        risk_management: Confidence::new(1.0 - outcome.risk_score.value()),
        compliance: Confidence::new(
            1.0 - COMPLIANCE_PENALTY_PER_ISSUE * outcome.risk_issues.len() as f64,
        ),
        blockchain_verified,
    }
}
