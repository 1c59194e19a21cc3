//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, hit-count based eviction,
//! and async memoization.

mod clock;
mod entry;
mod eviction;
mod memo;
mod registry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memo::{with_cache, Memoized};
pub use registry::{CacheRegistry, API_CACHE, STATIC_CACHE, USER_CACHE};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes for keys arriving over HTTP
pub const MAX_KEY_LENGTH: usize = 256;

/// A cache shared between async tasks.
pub type SharedCache<V, C = SystemClock> = Arc<RwLock<CacheStore<V, C>>>;

/// Wraps a store for sharing between tasks.
pub fn shared<V, C>(store: CacheStore<V, C>) -> SharedCache<V, C> {
    Arc::new(RwLock::new(store))
}
