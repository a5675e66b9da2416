//! Aggregate health report generation.

use tracing::{debug, warn};
use vouch_core::config::ObservabilityConfig;
use vouch_core::models::{HealthMetrics, HealthReport, HealthStatus, SubsystemHealth};

use crate::metrics::EngineMetrics;

/// Builds a [`HealthReport`] from live engine metrics.
pub struct HealthReporter;

impl HealthReporter {
    /// Generate a full health report from the given metrics.
    pub fn build(metrics: &EngineMetrics, config: &ObservabilityConfig) -> HealthReport {
        let snap = metrics.snapshot();

        let subsystems = vec![
            Self::check_adapters(snap.adapter_failure_rate, config),
            Self::check_result_cache(snap.cache_hit_rate, snap.cache_hits + snap.cache_misses),
            Self::check_ledger(snap.ledger_rejections, snap.total_verifications),
        ];
        let overall_status = Self::derive_overall(&subsystems);
        if overall_status == HealthStatus::Healthy {
            debug!(status = %overall_status, "health report assembled");
        } else {
            warn!(
                status = %overall_status,
                adapter_failure_rate = snap.adapter_failure_rate,
                "engine health impaired"
            );
        }

        HealthReport {
            overall_status,
            subsystems,
            metrics: HealthMetrics {
                total_verifications: snap.total_verifications,
                approved: snap.approved,
                flagged: snap.flagged,
                rejected: snap.rejected,
                cache_hit_rate: snap.cache_hit_rate,
                adapter_failure_rate: snap.adapter_failure_rate,
            },
        }
    }

    /// Adapter reliability is the one dial that can take the engine down:
    /// verifications still complete when signals fail, but every one of them
    /// degrades to baseline confidence.
    fn check_adapters(failure_rate: f64, config: &ObservabilityConfig) -> SubsystemHealth {
        let status = if failure_rate > config.unhealthy_failure_rate {
            HealthStatus::Unhealthy
        } else if failure_rate > config.degraded_failure_rate {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };
        SubsystemHealth {
            name: "adapters".to_string(),
            status,
            message: Some(format!("failure rate {failure_rate:.3}")),
        }
    }

    fn check_result_cache(hit_rate: f64, lookups: u64) -> SubsystemHealth {
        SubsystemHealth {
            name: "result_cache".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("hit rate {hit_rate:.3} over {lookups} lookups")),
        }
    }

    fn check_ledger(rejections: u64, total: u64) -> SubsystemHealth {
        // Ledger rejections are caller errors, not engine illness; they are
        // reported for visibility only.
        SubsystemHealth {
            name: "ledger".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{rejections} rejected claims of {total} runs")),
        }
    }

    /// Derive overall status: unhealthy if any subsystem is unhealthy,
    /// degraded if any is degraded, otherwise healthy.
    fn derive_overall(subsystems: &[SubsystemHealth]) -> HealthStatus {
        let mut worst = HealthStatus::Healthy;
        for s in subsystems {
            match s.status {
                HealthStatus::Unhealthy => return HealthStatus::Unhealthy,
                HealthStatus::Degraded => worst = HealthStatus::Degraded,
                HealthStatus::Healthy => {}
            }
        }
        worst
    }
}
