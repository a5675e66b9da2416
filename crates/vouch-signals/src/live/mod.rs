//! Live HTTP adapters over reqwest.
//!
//! One attempt per call, transport timeout baked into the client. The
//! orchestrator wraps calls in its own deadline on top, so a hung connection
//! can never stall a verification past its ceiling.

pub mod chain;
pub mod market;

pub use chain::LiveChainLookup;
pub use market::LiveMarketFeed;

use vouch_core::errors::AdapterError;

/// Map a reqwest failure onto the adapter taxonomy.
pub(crate) fn classify_transport_error(
    adapter: &str,
    timeout_secs: u64,
    err: reqwest::Error,
) -> AdapterError {
    if err.is_timeout() {
        AdapterError::Timeout {
            adapter: adapter.to_string(),
            timeout_secs,
        }
    } else if err.is_decode() {
        AdapterError::MalformedResponse {
            adapter: adapter.to_string(),
            reason: err.to_string(),
        }
    } else {
        AdapterError::Unavailable {
            adapter: adapter.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Build the shared reqwest client with the adapter's transport timeout.
pub(crate) fn build_client(
    adapter: &str,
    timeout: std::time::Duration,
) -> Result<reqwest::Client, AdapterError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .gzip(true)
        .build()
        .map_err(|e| AdapterError::Unavailable {
            adapter: adapter.to_string(),
            reason: format!("client construction failed: {e}"),
        })
}
