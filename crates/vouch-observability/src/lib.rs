//! # vouch-observability
//!
//! Structured logging setup, engine metrics, and health reporting. The
//! verification engine records into [`EngineMetrics`] as it works;
//! [`HealthReporter`] turns those counters into the health report exposed to
//! operators.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::HealthReporter;
pub use metrics::{EngineMetrics, MetricsSnapshot};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
