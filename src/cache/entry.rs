//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and hit tracking.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Number of successful reads since the entry was created
    pub hit_count: u64,
    /// Insertion order, used to break eviction ties
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_ms` after `now_ms`.
    pub fn new(value: V, now_ms: u64, ttl_ms: u64, seq: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_ms),
            hit_count: 0,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is stale only once the current time is strictly past
    /// `expires_at`; at exactly `expires_at` it is still served.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}
