use proptest::prelude::*;
use vouch_core::constants::{MIN_CLAIM_CONFIDENCE, PROOF_BONUS, TRUST_SCORE_MAX};
use vouch_core::errors::LedgerError;
use vouch_core::trust::{ProofDigest, TrustScore};
use vouch_proof::{apply_proof_bonus, combine_proofs, proof_hash, trust_score};

// ─── Scoring formula holds across the whole valid range ──────────────────

proptest! {
    #[test]
    fn trust_score_is_bonus_then_clamp(
        confidence in MIN_CLAIM_CONFIDENCE..=TRUST_SCORE_MAX,
        proof in any::<u128>(),
    ) {
        let score = trust_score(confidence, ProofDigest::from_u128(proof)).unwrap();
        let expected = (confidence + PROOF_BONUS).min(TRUST_SCORE_MAX);
        prop_assert_eq!(score.value(), expected);
    }
}

// ─── Everything under the floor fails the same way ───────────────────────

proptest! {
    #[test]
    fn trust_score_rejects_all_weak_confidence(
        confidence in 0..MIN_CLAIM_CONFIDENCE,
        proof in any::<u128>(),
    ) {
        let err = trust_score(confidence, ProofDigest::from_u128(proof)).unwrap_err();
        prop_assert_eq!(err, LedgerError::InsufficientConfidence {
            confidence,
            minimum: MIN_CLAIM_CONFIDENCE,
        });
    }
}

// ─── Scores never leave the basis-point scale ────────────────────────────

proptest! {
    #[test]
    fn bonus_scoring_stays_on_scale(confidence in any::<u32>()) {
        let score = apply_proof_bonus(confidence);
        prop_assert!(score.value() <= TRUST_SCORE_MAX);
        prop_assert!(score >= TrustScore::new(confidence.min(TRUST_SCORE_MAX)),
            "Bonus must never lower a score");
    }
}

// ─── Changing any single input relocates the proof hash ──────────────────

proptest! {
    #[test]
    fn proof_hash_bijective_per_input(
        id in any::<u128>(),
        id2 in any::<u128>(),
        data in any::<u128>(),
        trust in 0u32..=TRUST_SCORE_MAX,
    ) {
        prop_assume!(id != id2);
        let score = TrustScore::new(trust);
        let left = proof_hash(ProofDigest::from_u128(id), ProofDigest::from_u128(data), score);
        let right = proof_hash(ProofDigest::from_u128(id2), ProofDigest::from_u128(data), score);
        prop_assert_ne!(left, right);
    }
}

// ─── Proof chaining is associative under any grouping ────────────────────

proptest! {
    #[test]
    fn combine_proofs_associates(
        a in any::<u128>(),
        b in any::<u128>(),
        c in any::<u128>(),
    ) {
        let (a, b, c) = (
            ProofDigest::from_u128(a),
            ProofDigest::from_u128(b),
            ProofDigest::from_u128(c),
        );
        prop_assert_eq!(
            combine_proofs(combine_proofs(a, b), c),
            combine_proofs(a, combine_proofs(b, c))
        );
    }
}
