//! Aggregate verification of multiple executions in one ledger call.

use crate::trust::{ProofDigest, TrustScore};
use serde::{Deserialize, Serialize};

/// Request to verify up to [`crate::constants::MAX_BATCH_SIZE`] executions at
/// once. Individual executions are pre-aggregated by the caller: the ledger
/// sees only the digest, the count, and the confidence sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Digest committing to the set of execution ids in the batch.
    pub execution_digest: ProofDigest,
    /// Number of executions aggregated into this request.
    pub count: u32,
    /// Sum of the per-execution confidences, in basis points.
    pub total_confidence: u32,
    /// Supporting proof material for the whole batch.
    pub batch_proof: ProofDigest,
}

/// Outcome of a batch verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Identity of this batch run, derived from its inputs.
    pub batch_id: ProofDigest,
    /// Executions granted credit.
    pub verified_count: u32,
    /// Executions denied credit. `verified_count + failed_count` always
    /// equals the request's `count`.
    pub failed_count: u32,
    /// Trust score of the batch average confidence.
    pub average_trust_score: TrustScore,
}
