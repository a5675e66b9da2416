//! Engine configuration, loadable from TOML with full defaults.

pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod signals_config;

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use signals_config::SignalsConfig;

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration. Every section has working defaults, so an empty
/// TOML file (or no file at all) yields a runnable engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VouchConfig {
    pub cache: CacheConfig,
    pub signals: SignalsConfig,
    pub observability: ObservabilityConfig,
}

impl VouchConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with. Defaults always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cache.result_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.result_ttl_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        if self.cache.market_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.market_ttl_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        if self.signals.adapter_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "signals.adapter_timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                reason: format!(
                    "unknown level {:?}, expected one of {LEVELS:?}",
                    self.observability.log_level
                ),
            });
        }
        let degraded = self.observability.degraded_failure_rate;
        let unhealthy = self.observability.unhealthy_failure_rate;
        if !(0.0..=1.0).contains(&degraded) || !(0.0..=1.0).contains(&unhealthy) {
            return Err(ConfigError::InvalidValue {
                field: "observability.*_failure_rate".to_string(),
                reason: "rates must be within [0.0, 1.0]".to_string(),
            });
        }
        if degraded > unhealthy {
            return Err(ConfigError::InvalidValue {
                field: "observability.degraded_failure_rate".to_string(),
                reason: "must not exceed unhealthy_failure_rate".to_string(),
            });
        }
        Ok(())
    }
}
