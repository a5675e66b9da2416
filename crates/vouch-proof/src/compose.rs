//! Scoring formula and proof composition.
//!
//! ```text
//! trust = min(confidence + PROOF_BONUS, TRUST_SCORE_MAX)
//! ```
//!
//! The proof values combined here are plain field elements mixed with
//! wrapping arithmetic. That is a deliberate stand-in for a real proving
//! system: it preserves the behavioral contract (determinism, order
//! sensitivity, per-input collision freedom) without claiming any
//! cryptographic strength. A production deployment wanting actual
//! zero-knowledge guarantees would swap these two functions for a real
//! circuit and keep the rest of the ledger unchanged.

use vouch_core::constants::{MIN_CLAIM_CONFIDENCE, PROOF_BONUS, TRUST_SCORE_MAX};
use vouch_core::errors::LedgerError;
use vouch_core::trust::{ProofDigest, TrustScore};

/// Odd multipliers for the positional mix. Odd values are bijections modulo
/// 2^128, so changing any single input always changes the composed hash.
const MIX_K1: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c835;
const MIX_K2: u128 = 0xc2b2_ae3d_27d4_eb4f_9e37_79b9_7f4a_7c15;

/// Score a validated claim: the flat proof bonus on top of the claimed
/// confidence, clamped to the scale ceiling.
///
/// Fails with [`LedgerError::ConfidenceOutOfRange`] above the basis-point
/// scale and [`LedgerError::InsufficientConfidence`] below the verification
/// floor, in that order. The proof itself does not shift the score —
/// presenting one at all is what earns the flat bonus — so the parameter is
/// unused by the stand-in arithmetic.
pub fn trust_score(confidence: u32, _proof: ProofDigest) -> Result<TrustScore, LedgerError> {
    if confidence > TRUST_SCORE_MAX {
        return Err(LedgerError::ConfidenceOutOfRange {
            confidence,
            max: TRUST_SCORE_MAX,
        });
    }
    if confidence < MIN_CLAIM_CONFIDENCE {
        return Err(LedgerError::InsufficientConfidence {
            confidence,
            minimum: MIN_CLAIM_CONFIDENCE,
        });
    }
    Ok(apply_proof_bonus(confidence))
}

/// Bonus-and-clamp without the floor check.
///
/// The batch path scores the *average* confidence with this and applies its
/// own credit rule afterwards; a weak average earns partial credit there
/// instead of failing outright.
pub fn apply_proof_bonus(confidence: u32) -> TrustScore {
    TrustScore::new(confidence.saturating_add(PROOF_BONUS))
}

/// Positional mix of execution id, proof data, and trust score into one
/// field element.
///
/// Polynomial accumulation: `((id * K1) + data) * K2 + trust`. The mix is
/// order-sensitive (swapping id and data lands elsewhere) and, because both
/// multipliers are odd, bijective in every argument — no single-field change
/// can leave the hash unchanged.
pub fn proof_hash(
    execution_id: ProofDigest,
    proof_data: ProofDigest,
    trust_score: TrustScore,
) -> ProofDigest {
    let mixed = execution_id
        .value()
        .wrapping_mul(MIX_K1)
        .wrapping_add(proof_data.value())
        .wrapping_mul(MIX_K2)
        .wrapping_add(u128::from(trust_score.value()));
    ProofDigest::from_u128(mixed)
}

/// Associative combinator for chaining proofs.
///
/// Wrapping addition, so later attestations can be folded in under any
/// grouping and land on the same aggregate.
pub fn combine_proofs(a: ProofDigest, b: ProofDigest) -> ProofDigest {
    ProofDigest::from_u128(a.value().wrapping_add(b.value()))
}
