//! Verification outcomes returned to callers.

use crate::models::{ChainConfirmation, MarketContext};
use crate::trust::Confidence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final disposition of a verified decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// High confidence, low risk. Safe to act on.
    Approved,
    /// Worth a human look before acting.
    Flagged,
    /// Confidence too low or risk too high to act on.
    Rejected,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerificationStatus::Approved => "approved",
            VerificationStatus::Flagged => "flagged",
            VerificationStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// Per-dimension trust breakdown accompanying every result.
///
/// Each dimension sits in [0.0, 1.0]. `overall` is the blended confidence,
/// not an average of the other dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustMetrics {
    pub overall: Confidence,
    /// How consistent this decision is with the agent's verified history.
    pub strategy_consistency: Confidence,
    /// How well current market conditions support the decision.
    pub market_alignment: Confidence,
    /// Inverse of the blended risk score.
    pub risk_management: Confidence,
    /// Degrades with each risk issue raised during verification.
    pub compliance: Confidence,
    /// 1.0 for a confirmed transaction, 0.0 for a failed lookup, 0.5 when no
    /// transaction was offered.
    pub blockchain_verified: Confidence,
}

/// Everything the engine concluded about one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Unique id for this verification run. Cache hits return the original
    /// run's id unchanged.
    pub verification_id: String,
    pub status: VerificationStatus,
    pub confidence: Confidence,
    /// Complement of confidence, kept explicit for audit trails.
    pub risk_score: Confidence,
    /// Human-readable findings, risk issues first, advisories after.
    pub issues: Vec<String>,
    pub trust_metrics: TrustMetrics,
    /// Chain lookup outcome, when the decision referenced a transaction.
    pub blockchain: Option<ChainConfirmation>,
    /// Market snapshot used for blending, when one was available.
    pub market: Option<MarketContext>,
    /// When the verification actually ran. Cache hits preserve this.
    pub timestamp: DateTime<Utc>,
}

impl VerificationResult {
    /// True when the decision may be acted upon without review.
    pub fn is_approved(&self) -> bool {
        self.status == VerificationStatus::Approved
    }
}
