use serde::{Deserialize, Serialize};

use super::defaults;

/// Result and market cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum entries per cache.
    pub capacity: u64,
    /// Verification result time-to-live in seconds.
    pub result_ttl_secs: u64,
    /// Market context time-to-live in seconds.
    pub market_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            result_ttl_secs: defaults::DEFAULT_RESULT_TTL_SECS,
            market_ttl_secs: defaults::DEFAULT_MARKET_TTL_SECS,
        }
    }
}
