//! Cache Statistics Module
//!
//! Tracks cache metrics: resident size, per-entry hit average, and request counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of a cache's statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of resident entries
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Mean hits per resident entry (sum of hit counts / size)
    pub hit_rate: f64,
    /// Successful `get` calls
    pub hits: u64,
    /// `get` calls that found nothing or a stale entry
    pub misses: u64,
    /// Entries removed to make room under capacity pressure
    pub evictions: u64,
    /// Entries removed because their TTL had passed
    pub expirations: u64,
    /// hits / (hits + misses)
    pub hit_ratio: f64,
}

// == Counters ==
/// Running request counters kept by a store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

impl Counters {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Hit Ratio ==
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl CacheStats {
    /// Builds a snapshot from resident hit counts and the running counters.
    pub fn from_parts(
        hit_counts: impl IntoIterator<Item = u64>,
        max_size: usize,
        counters: &Counters,
    ) -> Self {
        let (size, total_hits) = hit_counts
            .into_iter()
            .fold((0usize, 0u64), |(n, sum), hits| (n + 1, sum.saturating_add(hits)));

        let hit_rate = if size == 0 {
            0.0
        } else {
            total_hits as f64 / size as f64
        };

        Self {
            size,
            max_size,
            hit_rate,
            hits: counters.hits,
            misses: counters.misses,
            evictions: counters.evictions,
            expirations: counters.expirations,
            hit_ratio: counters.hit_ratio(),
        }
    }
}
