//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! hit-count based eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::eviction::{select_victim, sweep_expired};
use crate::cache::stats::Counters;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Cache Store ==
/// Bounded cache with per-entry TTL.
///
/// The store is single-owner: every operation takes `&self` or `&mut self`
/// and runs to completion. Share it between tasks through [`SharedCache`].
///
/// [`SharedCache`]: crate::cache::SharedCache
#[derive(Debug)]
pub struct CacheStore<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Request counters
    counters: Counters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    default_ttl: u64,
    /// Next insertion sequence number
    next_seq: u64,
    clock: C,
}

impl<V> CacheStore<V, SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore backed by the system clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, clamped to at least 1
    /// * `default_ttl` - Default TTL in milliseconds for entries without explicit TTL
    pub fn new(max_size: usize, default_ttl: u64) -> Self {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }
}

impl<V, C: Clock> CacheStore<V, C> {
    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            counters: Counters::default(),
            max_size: max_size.max(1),
            default_ttl,
            next_seq: 0,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any existing entry.
    ///
    /// When the cache is at capacity, expired entries are swept first. If that
    /// frees nothing, the entry with the fewest hits is evicted.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in milliseconds (uses default_ttl if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<u64>) {
        let key = key.into();
        let now = self.clock.now_ms();

        if self.entries.len() >= self.max_size {
            let swept = sweep_expired(&mut self.entries, now);
            self.counters.record_expirations(swept);

            if self.entries.len() >= self.max_size {
                if let Some(victim) = select_victim(&self.entries) {
                    self.entries.remove(&victim);
                    self.counters.record_eviction();
                    debug!(key = %victim, "evicted entry with lowest hit count");
                }
            }
        }

        // A replaced key keeps its insertion position
        let seq = match self.entries.get(&key) {
            Some(existing) => existing.seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };

        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(value, now, ttl, seq));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None if the key is missing or stale. Stale entries are removed.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        if !self.check_fresh(key) {
            self.counters.record_miss();
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.record_hit();
        self.counters.record_hit();
        Some(entry.value.clone())
    }

    // == Has ==
    /// Checks whether a fresh entry exists without counting a hit.
    ///
    /// A stale entry is removed.
    pub fn has(&mut self, key: &str) -> bool {
        self.check_fresh(key)
    }

    /// Returns true if `key` holds a fresh entry, removing it if stale.
    fn check_fresh(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return false,
        };

        if expired {
            self.entries.remove(key);
            self.counters.record_expirations(1);
        }
        !expired
    }

    // == Delete ==
    /// Removes an entry by key. Returns true if an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries. Request counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_parts(
            self.entries.values().map(|entry| entry.hit_count),
            self.max_size,
            &self.counters,
        )
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let removed = sweep_expired(&mut self.entries, self.clock.now_ms());
        self.counters.record_expirations(removed);
        removed
    }

    /// Returns the hit count of a resident entry, stale or not.
    #[cfg(test)]
    pub(crate) fn hit_count(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.hit_count)
    }

    /// Returns the remaining TTL of a fresh entry in milliseconds.
    pub fn ttl_remaining(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.ttl_remaining_ms(now))
    }

    // == Length ==
    /// Returns the current number of resident entries, including stale ones
    /// not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }
}
