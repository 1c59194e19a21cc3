//! TTL Cleanup Task
//!
//! Optional background task that periodically removes expired entries from
//! every registered cache. Without it, expiry is purely lazy.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheRegistry, Clock};

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task sleeps for `interval` between runs and takes each cache's write
/// lock only for the duration of its sweep.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let registry = CacheRegistry::from_config(&config);
/// let cleanup_handle = spawn_cleanup_task(registry.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<C>(caches: CacheRegistry<C>, interval: Duration) -> JoinHandle<()>
where
    C: Clock + Clone + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = caches.sweep_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
