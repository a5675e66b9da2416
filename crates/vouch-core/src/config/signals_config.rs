use serde::{Deserialize, Serialize};

use super::defaults;

/// External signal adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalsConfig {
    /// Chain explorer endpoint URL. `None` disables the live chain adapter.
    pub chain_endpoint: Option<String>,
    /// Market data endpoint URL. `None` disables the live market adapter.
    pub market_endpoint: Option<String>,
    /// Per-call deadline for any adapter, in seconds. One attempt, no retries.
    pub adapter_timeout_secs: u64,
}

impl Default for SignalsConfig {
    fn default() -> Self {
        Self {
            chain_endpoint: None,
            market_endpoint: None,
            adapter_timeout_secs: defaults::DEFAULT_ADAPTER_TIMEOUT_SECS,
        }
    }
}
