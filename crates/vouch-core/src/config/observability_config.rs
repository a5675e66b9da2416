use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Adapter failure rate above which health reports degraded.
    pub degraded_failure_rate: f64,
    /// Adapter failure rate above which health reports unhealthy.
    pub unhealthy_failure_rate: f64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            degraded_failure_rate: defaults::DEFAULT_DEGRADED_FAILURE_RATE,
            unhealthy_failure_rate: defaults::DEFAULT_UNHEALTHY_FAILURE_RATE,
        }
    }
}
