use crate::constants::TRUST_SCORE_MAX;
use crate::trust::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-side trust score in basis points, clamped to [0, 10_000].
///
/// Integer basis points keep the verification arithmetic bit-identical across
/// nodes; conversion to the float scale happens only at the orchestrator
/// boundary via [`TrustScore::as_confidence`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TrustScore(u32);

impl TrustScore {
    /// Full trust: 10_000 basis points.
    pub const MAX: TrustScore = TrustScore(TRUST_SCORE_MAX);
    /// No trust at all.
    pub const ZERO: TrustScore = TrustScore(0);

    /// Create a new TrustScore, clamping to the basis-point ceiling.
    pub fn new(basis_points: u32) -> Self {
        Self(basis_points.min(TRUST_SCORE_MAX))
    }

    /// Raw basis-point value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Add a bonus, saturating at the ceiling rather than wrapping.
    pub fn saturating_add(self, bonus: u32) -> Self {
        Self::new(self.0.saturating_add(bonus))
    }

    /// True when the score is at or above `threshold` basis points.
    pub fn meets(self, threshold: u32) -> bool {
        self.0 >= threshold
    }

    /// Convert to the orchestrator's [0.0, 1.0] confidence scale.
    pub fn as_confidence(self) -> Confidence {
        Confidence::new(f64::from(self.0) / f64::from(TRUST_SCORE_MAX))
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

impl From<u32> for TrustScore {
    fn from(basis_points: u32) -> Self {
        Self::new(basis_points)
    }
}

impl From<TrustScore> for u32 {
    fn from(score: TrustScore) -> Self {
        score.0
    }
}
