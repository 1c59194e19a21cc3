//! ttl_cache - A process-local bounded cache
//!
//! Provides per-entry TTL expiration, hit-count based eviction, async
//! memoization, and a small HTTP service over named cache instances.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{with_cache, CacheRegistry, CacheStats, CacheStore, Memoized, SharedCache};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
