//! Error types for external signal adapters.

/// Errors raised by chain and market adapters.
///
/// All variants are recoverable at the orchestrator: a failed signal degrades
/// the verification instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The upstream service could not be reached or refused the request.
    #[error("{adapter} adapter unavailable: {reason}")]
    Unavailable { adapter: String, reason: String },

    /// The adapter did not answer within its deadline.
    #[error("{adapter} adapter timed out after {timeout_secs}s")]
    Timeout { adapter: String, timeout_secs: u64 },

    /// The upstream answered with data the adapter could not interpret.
    #[error("{adapter} adapter returned malformed data: {reason}")]
    MalformedResponse { adapter: String, reason: String },
}

impl AdapterError {
    /// Which adapter produced this error, for logs and metrics labels.
    pub fn adapter(&self) -> &str {
        match self {
            AdapterError::Unavailable { adapter, .. }
            | AdapterError::Timeout { adapter, .. }
            | AdapterError::MalformedResponse { adapter, .. } => adapter,
        }
    }
}
