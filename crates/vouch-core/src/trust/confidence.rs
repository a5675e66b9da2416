use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Confidence score clamped to [0.0, 1.0].
/// Represents how confident the orchestrator is that a decision is sound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold — decisions strictly above this are
    /// candidates for approval.
    pub const HIGH: f64 = 0.8;
    /// Medium confidence threshold — the floor for flagging instead of
    /// rejecting.
    pub const MEDIUM: f64 = 0.5;
    /// Low threshold, used as the risk ceiling for approval.
    pub const LOW: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Complementary risk score: `1.0 - confidence`.
    pub fn risk(self) -> Self {
        Self(1.0 - self.0)
    }

    /// Strictly above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 > Self::HIGH
    }

    /// Strictly above the medium threshold.
    pub fn is_medium(self) -> bool {
        self.0 > Self::MEDIUM
    }
}

impl Default for Confidence {
    /// Neutral prior before any verification signal is applied.
    fn default() -> Self {
        Self(0.7)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add for Confidence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Confidence {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
