//! Outcome classification.

use vouch_core::{Confidence, VerificationStatus};

/// Risk strictly below this still qualifies for flagging; at or above it the
/// decision is rejected outright.
pub const FLAG_RISK_CEILING: f64 = 0.6;

/// Map a blended confidence and risk pair onto a disposition.
///
/// All comparisons are strict: landing exactly on a threshold takes the more
/// cautious branch. A confidence of exactly 0.8 is flagged, not approved.
pub fn classify(confidence: Confidence, risk_score: Confidence) -> VerificationStatus {
    if confidence.is_high() && risk_score.value() < Confidence::LOW {
        VerificationStatus::Approved
    } else if confidence.is_medium() && risk_score.value() < FLAG_RISK_CEILING {
        VerificationStatus::Flagged
    } else {
        VerificationStatus::Rejected
    }
}
