//! Error types for decision request validation.

/// Errors raised while validating an incoming decision request, before any
/// ledger or adapter work happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("agent id must not be empty")]
    EmptyAgentId,

    #[error("asset symbol must not be empty")]
    EmptyAsset,

    /// Amounts must be finite and strictly positive.
    #[error("invalid amount {amount}")]
    InvalidAmount { amount: f64 },

    /// Prices, when given, must be finite and strictly positive.
    #[error("invalid price {price}")]
    InvalidPrice { price: f64 },

    /// The transaction hash does not match the format of the target chain.
    #[error("malformed transaction hash for {chain}: {hash}")]
    MalformedTransactionHash { chain: String, hash: String },
}
