//! Engine metrics: verification outcomes, cache effectiveness, adapter
//! reliability.
//!
//! Counters are recorded through `&self` because verifications run
//! request-parallel over one shared engine. Plain atomics cover the scalar
//! counters; the per-adapter breakdowns live in a [`DashMap`] keyed by
//! adapter name.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;
use vouch_core::models::VerificationStatus;

/// Live counters for a running engine.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    total_verifications: AtomicU64,
    approved: AtomicU64,
    flagged: AtomicU64,
    rejected: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    ledger_rejections: AtomicU64,
    adapter_calls: DashMap<String, u64>,
    adapter_failures: DashMap<String, u64>,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed verification and its disposition.
    pub fn record_verification(&self, status: VerificationStatus) {
        self.total_verifications.fetch_add(1, Ordering::Relaxed);
        match status {
            VerificationStatus::Approved => self.approved.fetch_add(1, Ordering::Relaxed),
            VerificationStatus::Flagged => self.flagged.fetch_add(1, Ordering::Relaxed),
            VerificationStatus::Rejected => self.rejected.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an attempted adapter call.
    pub fn record_adapter_call(&self, adapter: &str) {
        *self.adapter_calls.entry(adapter.to_string()).or_default() += 1;
    }

    /// Record an adapter call that failed or timed out.
    pub fn record_adapter_failure(&self, adapter: &str) {
        *self.adapter_failures.entry(adapter.to_string()).or_default() += 1;
    }

    /// Record a claim the ledger refused to verify.
    pub fn record_ledger_rejection(&self) {
        self.ledger_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of lookups served from the result cache.
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits.load(Ordering::Relaxed);
        let total = hits + self.cache_misses.load(Ordering::Relaxed);
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Fraction of adapter calls that failed, across all adapters.
    pub fn adapter_failure_rate(&self) -> f64 {
        let calls: u64 = self.adapter_calls.iter().map(|e| *e.value()).sum();
        if calls == 0 {
            return 0.0;
        }
        let failures: u64 = self.adapter_failures.iter().map(|e| *e.value()).sum();
        failures as f64 / calls as f64
    }

    /// Point-in-time copy of every counter, for export and health reports.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_verifications: self.total_verifications.load(Ordering::Relaxed),
            approved: self.approved.load(Ordering::Relaxed),
            flagged: self.flagged.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            ledger_rejections: self.ledger_rejections.load(Ordering::Relaxed),
            adapter_calls: self
                .adapter_calls
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
            adapter_failures: self
                .adapter_failures
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
            cache_hit_rate: self.cache_hit_rate(),
            adapter_failure_rate: self.adapter_failure_rate(),
        }
    }
}

/// Serializable snapshot of [`EngineMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_verifications: u64,
    pub approved: u64,
    pub flagged: u64,
    pub rejected: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub ledger_rejections: u64,
    pub adapter_calls: HashMap<String, u64>,
    pub adapter_failures: HashMap<String, u64>,
    pub cache_hit_rate: f64,
    pub adapter_failure_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_handle_zero_denominators() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.cache_hit_rate(), 0.0);
        assert_eq!(metrics.adapter_failure_rate(), 0.0);
    }

    #[test]
    fn snapshot_reflects_recordings() {
        let metrics = EngineMetrics::new();
        metrics.record_verification(VerificationStatus::Approved);
        metrics.record_verification(VerificationStatus::Flagged);
        metrics.record_verification(VerificationStatus::Flagged);
        metrics.record_cache_hit();
        metrics.record_cache_miss();
        metrics.record_adapter_call("chain");
        metrics.record_adapter_call("market");
        metrics.record_adapter_failure("market");

        let snap = metrics.snapshot();
        assert_eq!(snap.total_verifications, 3);
        assert_eq!(snap.approved, 1);
        assert_eq!(snap.flagged, 2);
        assert_eq!(snap.cache_hit_rate, 0.5);
        assert_eq!(snap.adapter_failure_rate, 0.5);
        assert_eq!(snap.adapter_failures.get("market"), Some(&1));
    }

    #[test]
    fn snapshot_serializes_with_stable_field_names() {
        let metrics = EngineMetrics::new();
        metrics.record_verification(VerificationStatus::Approved);
        metrics.record_cache_miss();
        metrics.record_adapter_call("chain");

        // Exported counters keep their recorded names; consumers key on them.
        let value = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(value["total_verifications"], 1);
        assert_eq!(value["approved"], 1);
        assert_eq!(value["cache_misses"], 1);
        assert_eq!(value["adapter_calls"]["chain"], 1);
        assert_eq!(value["cache_hit_rate"], 0.0);
        assert_eq!(value.as_object().unwrap().len(), 11);
    }
}
