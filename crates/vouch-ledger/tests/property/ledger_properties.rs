use chrono::Utc;
use proptest::prelude::*;
use vouch_core::constants::{MAX_BATCH_SIZE, MIN_CLAIM_CONFIDENCE, TRUST_SCORE_MAX};
use vouch_core::errors::LedgerError;
use vouch_core::models::{AgentId, BatchRequest, ExecutionClaim, PrivateInputs};
use vouch_core::traits::IExecutionVerifier;
use vouch_core::trust::ProofDigest;
use vouch_ledger::LedgerVerifier;

fn make_claim(confidence: u32, execution_id: u128) -> ExecutionClaim {
    ExecutionClaim {
        agent_id: AgentId::from("agent-prop"),
        execution_id: ProofDigest::from_u128(execution_id),
        private: PrivateInputs::new(ProofDigest::from_u128(execution_id ^ 0xff), confidence),
        timestamp: Utc::now(),
    }
}

// ─── Every weak claim fails, every valid claim scores bonus-then-clamp ───

proptest! {
    #[test]
    fn weak_claims_always_fail(confidence in 0..MIN_CLAIM_CONFIDENCE, id in any::<u128>()) {
        let verifier = LedgerVerifier::new();
        let err = verifier
            .verify_execution(&make_claim(confidence, id), ProofDigest::from_u128(1), &AgentId::from("owner"))
            .unwrap_err();
        prop_assert!(
            matches!(err, LedgerError::InsufficientConfidence { .. }),
            "expected InsufficientConfidence, got {:?}",
            err
        );
    }
}

proptest! {
    #[test]
    fn valid_claims_score_deterministically(
        confidence in MIN_CLAIM_CONFIDENCE..=TRUST_SCORE_MAX,
        id in any::<u128>(),
        proof in any::<u128>(),
    ) {
        let verifier = LedgerVerifier::new();
        let owner = AgentId::from("owner");
        let claim = make_claim(confidence, id);
        let proof_data = ProofDigest::from_u128(proof);

        let first = verifier.verify_execution(&claim, proof_data, &owner).unwrap();
        let second = verifier.verify_execution(&claim, proof_data, &owner).unwrap();

        prop_assert_eq!(first.trust_score.value(), (confidence + 1_000).min(TRUST_SCORE_MAX));
        // Re-verification yields a new record with identical derived values.
        prop_assert_eq!(first.trust_score, second.trust_score);
        prop_assert_eq!(first.proof_hash, second.proof_hash);
    }
}

// ─── Batch counts always reconcile ───────────────────────────────────────

proptest! {
    #[test]
    fn batch_counts_always_reconcile(
        count in 1..=MAX_BATCH_SIZE,
        avg_confidence in 0..=TRUST_SCORE_MAX,
        digest in any::<u128>(),
    ) {
        let verifier = LedgerVerifier::new();
        let request = BatchRequest {
            execution_digest: ProofDigest::from_u128(digest),
            count,
            total_confidence: avg_confidence * count,
            batch_proof: ProofDigest::from_u128(digest.rotate_left(7)),
        };

        let result = verifier.batch_verify(&request, &AgentId::from("owner")).unwrap();
        prop_assert_eq!(result.verified_count + result.failed_count, count);
        prop_assert!(result.verified_count <= count);
    }
}

// ─── Full credit exactly at and above the trust threshold ────────────────

proptest! {
    #[test]
    fn batch_full_credit_iff_threshold_met(
        count in 1..=MAX_BATCH_SIZE,
        avg_confidence in 0..=TRUST_SCORE_MAX,
    ) {
        let verifier = LedgerVerifier::new();
        let request = BatchRequest {
            execution_digest: ProofDigest::from_u128(1),
            count,
            total_confidence: avg_confidence * count,
            batch_proof: ProofDigest::from_u128(2),
        };

        let result = verifier.batch_verify(&request, &AgentId::from("owner")).unwrap();
        let trust = result.average_trust_score.value();
        if trust >= 7_000 {
            prop_assert_eq!(result.failed_count, 0);
        } else {
            prop_assert_eq!(result.verified_count, count * trust / 10_000);
        }
    }
}
