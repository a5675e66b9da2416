//! Trade decisions submitted for verification.

use crate::models::{AgentId, ClaimEnvelope};
use crate::trust::ProofDigest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
            TradeAction::Hold => "hold",
        };
        write!(f, "{s}")
    }
}

/// Chains the engine can confirm transactions on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Ethereum,
    Base,
    Solana,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Chain::Ethereum => "ethereum",
            Chain::Base => "base",
            Chain::Solana => "solana",
        };
        write!(f, "{s}")
    }
}

/// A trade an agent intends to perform (or already performed, when
/// `transaction_hash` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub action: TradeAction,
    /// Asset symbol, e.g. "ETH" or "SOL".
    pub asset: String,
    /// Position size in asset units. Must be finite and positive.
    pub amount: f64,
    /// Limit or execution price, if known.
    pub price: Option<f64>,
    /// On-chain transaction to confirm, if the trade already settled.
    pub transaction_hash: Option<String>,
    pub chain: Chain,
    /// Free-text rationale from the agent. Advisory only.
    pub reasoning: Option<String>,
}

/// A verification request: who decided what, optionally backed by an
/// execution claim.
///
/// Not serializable as a whole because the claim half carries private inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRequest {
    pub agent_id: AgentId,
    pub decision: TradeDecision,
    /// Prior execution the agent offers as evidence of strategy consistency.
    pub claim: Option<ClaimEnvelope>,
}

impl DecisionRequest {
    /// Stable cache key over the request's identifying fields.
    ///
    /// The advisory `reasoning` text is excluded so rephrasing a rationale
    /// does not defeat caching; an attached claim participates only through
    /// its execution id. Non-finite amounts are rejected during request
    /// validation before anything is fingerprinted.
    pub fn fingerprint(&self) -> String {
        #[derive(Serialize)]
        struct Identity<'a> {
            agent_id: &'a str,
            action: TradeAction,
            asset: &'a str,
            amount: f64,
            price: Option<f64>,
            transaction_hash: Option<&'a str>,
            chain: Chain,
            execution_id: Option<ProofDigest>,
        }

        let identity = Identity {
            agent_id: self.agent_id.as_str(),
            action: self.decision.action,
            asset: &self.decision.asset,
            amount: self.decision.amount,
            price: self.decision.price,
            transaction_hash: self.decision.transaction_hash.as_deref(),
            chain: self.decision.chain,
            execution_id: self.claim.as_ref().map(|c| c.claim.execution_id),
        };
        // Flat struct of primitives with validated-finite floats; JSON
        // encoding cannot fail here.
        let bytes = serde_json::to_vec(&identity).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }
}
