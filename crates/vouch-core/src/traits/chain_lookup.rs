use crate::errors::AdapterError;
use crate::models::{Chain, ChainConfirmation};

/// Blockchain transaction lookup.
///
/// Implementations must be side-effect free from the caller's point of view:
/// the orchestrator may skip the call entirely (no transaction attached) or
/// abandon it at its deadline.
#[allow(async_fn_in_trait)]
pub trait IChainLookup: Send + Sync {
    /// Look up a transaction on the given chain and report its settlement
    /// state. A transaction that is simply not found is a successful lookup
    /// with `verified == false`, not an error.
    async fn verify_transaction(
        &self,
        tx_hash: &str,
        chain: Chain,
    ) -> Result<ChainConfirmation, AdapterError>;
}
