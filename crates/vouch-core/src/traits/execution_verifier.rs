use crate::errors::LedgerError;
use crate::models::{AgentId, BatchRequest, BatchResult, ExecutionClaim, VerifiedExecution};
use crate::trust::ProofDigest;

/// The ledger verification primitive.
///
/// Everything here is synchronous and deterministic: the same inputs produce
/// the same records, scores, and proof hashes on every node. Anything
/// wall-clock dependent (the `verified_at` stamp) comes from the
/// implementation's injected clock, not from these signatures.
pub trait IExecutionVerifier: Send + Sync {
    /// Verify a single execution claim. Consumes the claim's private inputs
    /// into a public record owned by `owner`.
    fn verify_execution(
        &self,
        claim: &ExecutionClaim,
        proof_data: ProofDigest,
        owner: &AgentId,
    ) -> Result<VerifiedExecution, LedgerError>;

    /// Verify a pre-aggregated batch of executions, granting partial credit
    /// when the batch average trust falls short of the full-credit threshold.
    fn batch_verify(
        &self,
        request: &BatchRequest,
        owner: &AgentId,
    ) -> Result<BatchResult, LedgerError>;

    /// Attach additional proof material to an existing record, returning the
    /// strengthened proof hash. Only the record's owner may do this.
    fn prove_execution(
        &self,
        record: &VerifiedExecution,
        additional_proof: ProofDigest,
        caller: &AgentId,
    ) -> Result<ProofDigest, LedgerError>;
}
