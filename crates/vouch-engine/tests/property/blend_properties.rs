//! Property tests for confidence blending and classification.

use chrono::Utc;
use proptest::prelude::*;
use vouch_core::{
    ChainConfirmation, Confidence, MarketContext, MarketSentiment, TradeAction, VerificationStatus,
};
use vouch_engine::blend::{
    blend, build_trust_metrics, BlendInputs, HIGH_VOLATILITY_THRESHOLD, LOW_LIQUIDITY_THRESHOLD,
};
use vouch_engine::classify::{classify, FLAG_RISK_CEILING};

fn sentiments() -> impl Strategy<Value = MarketSentiment> {
    prop_oneof![
        Just(MarketSentiment::Bullish),
        Just(MarketSentiment::Neutral),
        Just(MarketSentiment::Bearish),
    ]
}

fn actions() -> impl Strategy<Value = TradeAction> {
    prop_oneof![
        Just(TradeAction::Buy),
        Just(TradeAction::Sell),
        Just(TradeAction::Hold),
    ]
}

fn confirmation(verified: bool) -> ChainConfirmation {
    ChainConfirmation {
        verified,
        confirmations: if verified { 12 } else { 0 },
        block_number: if verified { 17_000_000 } else { 0 },
        timestamp: Utc::now(),
    }
}

fn market(volatility: f64, liquidity: f64, sentiment: MarketSentiment) -> MarketContext {
    MarketContext {
        volatility,
        volume_24h: 1_000_000.0,
        price_change_24h: 0.0,
        sentiment,
        liquidity_score: liquidity,
    }
}

proptest! {
    /// Whatever the signals say, confidence and risk stay complements inside
    /// the unit interval.
    #[test]
    fn confidence_and_risk_are_complements(
        chain_verified in proptest::option::of(any::<bool>()),
        volatility in 0.0f64..=1.0,
        liquidity in 0.0f64..=1.0,
        sentiment in sentiments(),
        action in actions(),
    ) {
        let chain = chain_verified.map(confirmation);
        let ctx = market(volatility, liquidity, sentiment);
        let outcome = blend(&BlendInputs {
            chain: chain.as_ref(),
            market: Some(&ctx),
            action,
        });

        let confidence = outcome.confidence.value();
        let risk = outcome.risk_score.value();
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!((0.0..=1.0).contains(&risk));
        prop_assert!((confidence + risk - 1.0).abs() < 1e-9);
    }

    /// Every deduction leaves exactly one risk issue, and nothing else does.
    #[test]
    fn issue_count_matches_applied_deductions(
        chain_verified in proptest::option::of(any::<bool>()),
        volatility in 0.0f64..=1.0,
        liquidity in 0.0f64..=1.0,
        sentiment in sentiments(),
        action in actions(),
    ) {
        let chain = chain_verified.map(confirmation);
        let ctx = market(volatility, liquidity, sentiment);
        let outcome = blend(&BlendInputs {
            chain: chain.as_ref(),
            market: Some(&ctx),
            action,
        });

        let mut expected = 0;
        if chain_verified == Some(false) {
            expected += 1;
        }
        if volatility > HIGH_VOLATILITY_THRESHOLD {
            expected += 1;
        }
        if liquidity < LOW_LIQUIDITY_THRESHOLD {
            expected += 1;
        }
        if sentiment == MarketSentiment::Bearish && action == TradeAction::Buy {
            expected += 1;
        }
        prop_assert_eq!(outcome.risk_issues.len(), expected);
    }

    /// Market data can only lower confidence relative to not having it.
    #[test]
    fn market_signals_never_raise_confidence(
        chain_verified in proptest::option::of(any::<bool>()),
        volatility in 0.0f64..=1.0,
        liquidity in 0.0f64..=1.0,
        sentiment in sentiments(),
        action in actions(),
    ) {
        let chain = chain_verified.map(confirmation);
        let ctx = market(volatility, liquidity, sentiment);

        let with_market = blend(&BlendInputs {
            chain: chain.as_ref(),
            market: Some(&ctx),
            action,
        });
        let without_market = blend(&BlendInputs {
            chain: chain.as_ref(),
            market: None,
            action,
        });

        prop_assert!(
            with_market.confidence.value() <= without_market.confidence.value() + 1e-9
        );
    }

    /// The classifier agrees with the written thresholds at every point of
    /// the confidence scale.
    #[test]
    fn classification_honors_thresholds(confidence in 0.0f64..=1.0) {
        let confidence = Confidence::new(confidence);
        let risk = confidence.risk();
        let status = classify(confidence, risk);

        let expected = if confidence.value() > Confidence::HIGH && risk.value() < Confidence::LOW {
            VerificationStatus::Approved
        } else if confidence.value() > Confidence::MEDIUM && risk.value() < FLAG_RISK_CEILING {
            VerificationStatus::Flagged
        } else {
            VerificationStatus::Rejected
        };
        prop_assert_eq!(status, expected);
    }

    /// Every trust dimension the blender derives lands in the unit interval.
    #[test]
    fn trust_dimensions_stay_in_unit_interval(
        chain_verified in proptest::option::of(any::<bool>()),
        volatility in 0.0f64..=1.0,
        liquidity in 0.0f64..=1.0,
        sentiment in sentiments(),
        action in actions(),
        consistency in 0.0f64..=1.0,
    ) {
        let chain = chain_verified.map(confirmation);
        let ctx = market(volatility, liquidity, sentiment);
        let inputs = BlendInputs {
            chain: chain.as_ref(),
            market: Some(&ctx),
            action,
        };
        let outcome = blend(&inputs);
        let metrics = build_trust_metrics(&outcome, &inputs, Confidence::new(consistency));

        for dimension in [
            metrics.overall,
            metrics.strategy_consistency,
            metrics.market_alignment,
            metrics.risk_management,
            metrics.compliance,
            metrics.blockchain_verified,
        ] {
            prop_assert!((0.0..=1.0).contains(&dimension.value()));
        }
    }
}
