//! Public record of a verified execution.

use crate::models::AgentId;
use crate::trust::{ProofDigest, TrustScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The ledger's public projection of a verified claim.
///
/// Carries only derived values: the proof hash commits to the private inputs
/// without revealing them, and the trust score is the claimed confidence with
/// the proof bonus already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedExecution {
    /// Verifying party that owns this record.
    pub owner: AgentId,
    /// Execution this record vouches for.
    pub execution_id: ProofDigest,
    /// Agent whose claim was verified.
    pub agent_id: AgentId,
    /// Trust score granted at verification time, proof bonus included.
    pub trust_score: TrustScore,
    /// Ledger-assigned verification time.
    pub verified_at: DateTime<Utc>,
    /// Composition of the claim's private inputs and supporting proof data.
    pub proof_hash: ProofDigest,
}
