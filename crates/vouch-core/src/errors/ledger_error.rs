//! Error types for ledger verification operations.

/// Errors raised by the verification ledger.
///
/// Every variant is deterministic: the same inputs fail the same way on every
/// node, and all of them are caller errors, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The claimed confidence is below the verification floor. The claim is
    /// rejected before any scoring happens.
    #[error("confidence {confidence} below required minimum {minimum}")]
    InsufficientConfidence { confidence: u32, minimum: u32 },

    /// The claimed confidence exceeds the basis-point scale. The claim is
    /// malformed, not merely weak.
    #[error("confidence {confidence} exceeds the {max} basis-point scale")]
    ConfidenceOutOfRange { confidence: u32, max: u32 },

    /// Batch size outside the accepted range. Raised for empty batches and
    /// for batches above the ceiling alike.
    #[error("batch of {count} outside allowed range 1..={max}")]
    BatchSizeOutOfRange { count: u32, max: u32 },

    /// A proof bonus was requested by someone other than the record's owner.
    #[error("caller {caller} does not own record held by {owner}")]
    OwnershipMismatch { caller: String, owner: String },
}
