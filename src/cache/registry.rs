//! Cache Registry Module
//!
//! Named, independently configured cache instances owned by the process
//! bootstrap and handed to request handlers.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::info;

use crate::cache::{shared, CacheStats, CacheStore, Clock, SharedCache, SystemClock};
use crate::config::{CacheConfig, Config};

/// Cache for downstream API responses
pub const API_CACHE: &str = "api";
/// Cache for user profiles
pub const USER_CACHE: &str = "user";
/// Cache for rarely changing static content
pub const STATIC_CACHE: &str = "static";

// == Cache Registry ==
/// Holds the named caches. Cloning shares the same instances.
///
/// Every cache built by the registry reads time from the same clock.
#[derive(Debug, Clone)]
pub struct CacheRegistry<C = SystemClock> {
    caches: BTreeMap<String, SharedCache<Value, C>>,
    clock: C,
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl CacheRegistry {
    /// Creates an empty registry backed by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `api`, `user` and `static` caches from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_cache(API_CACHE, &config.api_cache)
            .with_cache(USER_CACHE, &config.user_cache)
            .with_cache(STATIC_CACHE, &config.static_cache)
    }
}

impl<C: Clock + Clone> CacheRegistry<C> {
    /// Creates an empty registry reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            caches: BTreeMap::new(),
            clock,
        }
    }

    /// Adds (or replaces) a cache named `name`.
    pub fn with_cache(mut self, name: &str, config: &CacheConfig) -> Self {
        info!(
            "Cache '{}' configured: max_size={}, default_ttl={}ms",
            name, config.max_size, config.default_ttl_ms
        );
        let store = CacheStore::with_clock(
            config.max_size,
            config.default_ttl_ms,
            self.clock.clone(),
        );
        self.caches.insert(name.to_string(), shared(store));
        self
    }

    /// Looks up a cache by name.
    pub fn get(&self, name: &str) -> Option<SharedCache<Value, C>> {
        self.caches.get(name).cloned()
    }

    /// Registered cache names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caches.keys().map(String::as_str)
    }

    /// Statistics for every cache, keyed by name.
    pub async fn stats(&self) -> BTreeMap<String, CacheStats> {
        let mut all = BTreeMap::new();
        for (name, cache) in &self.caches {
            all.insert(name.clone(), cache.read().await.stats());
        }
        all
    }

    /// Removes expired entries from every cache.
    ///
    /// Returns the total number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut removed = 0;
        for cache in self.caches.values() {
            removed += cache.write().await.cleanup_expired();
        }
        removed
    }
}
