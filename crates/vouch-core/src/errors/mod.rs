//! Error handling for Vouch.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod adapter_error;
pub mod config_error;
pub mod ledger_error;
pub mod request_error;

pub use adapter_error::AdapterError;
pub use config_error::ConfigError;
pub use ledger_error::LedgerError;
pub use request_error::RequestError;

/// Top-level error for engine entry points.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VouchError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type VouchResult<T> = Result<T, VouchError>;
