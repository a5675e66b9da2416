//! LedgerVerifier — implements IExecutionVerifier over the vouch-proof
//! primitives, modeling the ledger program's record transitions.

use chrono::Utc;
use tracing::{debug, warn};
use vouch_core::constants::{BATCH_TRUST_THRESHOLD, MAX_BATCH_SIZE, TRUST_SCORE_MAX};
use vouch_core::errors::LedgerError;
use vouch_core::models::{AgentId, BatchRequest, BatchResult, ExecutionClaim, VerifiedExecution};
use vouch_core::traits::IExecutionVerifier;
use vouch_core::trust::ProofDigest;
use vouch_proof::{apply_proof_bonus, combine_proofs, proof_hash, trust_score};

/// Stateless verification primitive.
///
/// Holds no ledger state on purpose: records are terminal once created, and
/// the hosting layer owns persistence and transport-level identity. Keeping
/// the verifier stateless makes every operation a pure function of its
/// arguments plus the verification timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerVerifier;

impl LedgerVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl IExecutionVerifier for LedgerVerifier {
    /// Verify a single claim into an owned record.
    ///
    /// The private inputs feed only the scoring step: the claimed confidence
    /// becomes the trust score and the private result hash serves as the
    /// scoring witness. Neither appears in the record — the public proof
    /// hash commits to the execution id, the supporting proof data, and the
    /// resulting score.
    fn verify_execution(
        &self,
        claim: &ExecutionClaim,
        proof_data: ProofDigest,
        owner: &AgentId,
    ) -> Result<VerifiedExecution, LedgerError> {
        let score = trust_score(claim.private.confidence, claim.private.result_hash)?;
        let hash = proof_hash(claim.execution_id, proof_data, score);
        debug!(
            execution_id = %claim.execution_id,
            trust_score = %score,
            "execution claim verified"
        );

        Ok(VerifiedExecution {
            owner: owner.clone(),
            execution_id: claim.execution_id,
            agent_id: claim.agent_id.clone(),
            trust_score: score,
            verified_at: Utc::now(),
            proof_hash: hash,
        })
    }

    /// Verify a pre-aggregated batch.
    ///
    /// The average confidence (integer division, truncating) is scored
    /// without the single-claim floor: a weak batch earns partial credit
    /// instead of failing. At or above the full-credit threshold every
    /// execution counts; below it, credit is `count * trust / 10000`,
    /// truncated.
    fn batch_verify(
        &self,
        request: &BatchRequest,
        _owner: &AgentId,
    ) -> Result<BatchResult, LedgerError> {
        let count = request.count;
        if count == 0 || count > MAX_BATCH_SIZE {
            return Err(LedgerError::BatchSizeOutOfRange {
                count,
                max: MAX_BATCH_SIZE,
            });
        }

        let avg_confidence = request.total_confidence / count;
        if avg_confidence > TRUST_SCORE_MAX {
            return Err(LedgerError::ConfidenceOutOfRange {
                confidence: avg_confidence,
                max: TRUST_SCORE_MAX,
            });
        }

        let batch_trust = apply_proof_bonus(avg_confidence);
        let verified_count = if batch_trust.meets(BATCH_TRUST_THRESHOLD) {
            count
        } else {
            // Partial credit, truncated. count <= 5 and trust <= 10_000, so
            // the product stays well inside u32.
            count * batch_trust.value() / TRUST_SCORE_MAX
        };
        debug!(
            count,
            batch_trust = %batch_trust,
            verified_count,
            "batch verified"
        );

        Ok(BatchResult {
            batch_id: proof_hash(request.execution_digest, request.batch_proof, batch_trust),
            verified_count,
            failed_count: count - verified_count,
            average_trust_score: batch_trust,
        })
    }

    /// Fold an additional proof into an existing record's hash.
    ///
    /// Reads the record, never mutates it: the strengthened hash is the only
    /// output, and only the record's owner may produce it.
    fn prove_execution(
        &self,
        record: &VerifiedExecution,
        additional_proof: ProofDigest,
        caller: &AgentId,
    ) -> Result<ProofDigest, LedgerError> {
        if caller != &record.owner {
            warn!(
                caller = %caller,
                owner = %record.owner,
                execution_id = %record.execution_id,
                "prove_execution denied"
            );
            return Err(LedgerError::OwnershipMismatch {
                caller: caller.to_string(),
                owner: record.owner.to_string(),
            });
        }
        Ok(combine_proofs(record.proof_hash, additional_proof))
    }
}
