//! Execution claims submitted by agents for ledger verification.
//!
//! The private half of a claim never leaves the process: [`PrivateInputs`]
//! deliberately implements neither `Serialize` nor a transparent `Debug`, so
//! neither logging nor result serialization can leak it. Only derived values
//! (the proof hash, the trust score) appear in [`super::VerifiedExecution`].

use crate::models::AgentId;
use crate::trust::ProofDigest;
use chrono::{DateTime, Utc};
use std::fmt;

/// Inputs known only to the claiming agent.
///
/// `confidence` is the agent's self-reported execution confidence in basis
/// points; `result_hash` commits to the execution output without revealing it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateInputs {
    pub result_hash: ProofDigest,
    pub confidence: u32,
}

impl PrivateInputs {
    pub fn new(result_hash: ProofDigest, confidence: u32) -> Self {
        Self {
            result_hash,
            confidence,
        }
    }
}

// Redacted on purpose: claims travel through tracing spans and error
// messages, and the private half must not.
impl fmt::Debug for PrivateInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateInputs")
            .field("result_hash", &"<redacted>")
            .field("confidence", &"<redacted>")
            .finish()
    }
}

/// A claim that an agent executed something, pending verification.
///
/// Not serializable as a whole — the public projection of a verified claim is
/// [`super::VerifiedExecution`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionClaim {
    /// Agent that performed the execution.
    pub agent_id: AgentId,
    /// Public identifier of the execution being claimed.
    pub execution_id: ProofDigest,
    /// Private inputs backing the claim.
    pub private: PrivateInputs,
    /// When the claim was produced by the agent.
    pub timestamp: DateTime<Utc>,
}

impl ExecutionClaim {
    pub fn new(
        agent_id: AgentId,
        execution_id: ProofDigest,
        private: PrivateInputs,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            agent_id,
            execution_id,
            private,
            timestamp,
        }
    }
}

/// A claim paired with the supporting proof material an agent attaches to a
/// decision request.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimEnvelope {
    pub claim: ExecutionClaim,
    /// Auxiliary proof data mixed into the proof hash during verification.
    pub proof_data: ProofDigest,
}
