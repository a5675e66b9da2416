// Single source of truth for all default values.

// --- Cache ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_RESULT_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_MARKET_TTL_SECS: u64 = 60; // 1 minute

// --- Signals ---
pub const DEFAULT_ADAPTER_TIMEOUT_SECS: u64 = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DEGRADED_FAILURE_RATE: f64 = 0.1;
pub const DEFAULT_UNHEALTHY_FAILURE_RATE: f64 = 0.5;
