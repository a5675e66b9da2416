//! TTL caches backing the engine.
//!
//! Two instances exist per engine: one keyed by request fingerprint holding
//! full [`vouch_core::VerificationResult`]s, one keyed by asset symbol
//! holding [`vouch_core::MarketContext`] snapshots. Both are thin wrappers
//! over `moka`'s sync cache with a hard entry cap and time-to-live eviction.

use std::time::Duration;

use moka::sync::Cache;

/// Bounded TTL cache keyed by `String`.
///
/// Values are cloned out on read, so `V` should be cheap to clone or sit
/// behind an `Arc`. Entries expire `ttl` after insertion regardless of
/// access pattern; a stale entry must never be served just because it is
/// popular.
#[derive(Debug, Clone)]
pub struct TtlCache<V: Clone + Send + Sync + 'static> {
    inner: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    /// Create a cache holding at most `capacity` entries, each living for
    /// `ttl` from the moment it was inserted.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }

    /// Look up a value, cloning it out if present and unexpired.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key)
    }

    /// Insert or replace a value. Replacement resets the entry's TTL.
    pub fn insert(&self, key: String, value: V) {
        self.inner.insert(key, value);
    }

    /// Approximate number of live entries.
    pub fn len(&self) -> u64 {
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}
