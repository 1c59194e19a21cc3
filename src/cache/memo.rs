//! Memoization Module
//!
//! Wraps an async producer so its results are served from a shared cache.

use std::future::Future;
use std::marker::PhantomData;

use crate::cache::{Clock, SharedCache, SystemClock};

// == Memoized ==
/// An async producer whose `Ok` results are cached by a derived key.
///
/// The cache lock is never held while the producer runs. Two callers missing
/// the same key at once will both run the producer and the later write wins.
/// Producer errors are returned as-is and nothing is cached for them.
pub struct Memoized<V, A, F, K, C = SystemClock> {
    cache: SharedCache<V, C>,
    producer: F,
    key_fn: K,
    ttl: Option<u64>,
    _args: PhantomData<fn(A)>,
}

/// Wraps `producer` with `cache`, keying calls by `key_fn(&args)`.
///
/// `ttl` overrides the cache's default TTL (milliseconds) for stored results.
///
/// # Example
/// ```ignore
/// let users = with_cache(
///     cache.clone(),
///     |id: u64| async move { fetch_user(id).await },
///     |id: &u64| format!("user:{id}"),
///     None,
/// );
/// let user = users.call(7).await?;
/// ```
pub fn with_cache<V, A, F, K, C, Fut, E>(
    cache: SharedCache<V, C>,
    producer: F,
    key_fn: K,
    ttl: Option<u64>,
) -> Memoized<V, A, F, K, C>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<V, E>>,
    K: Fn(&A) -> String,
{
    Memoized {
        cache,
        producer,
        key_fn,
        ttl,
        _args: PhantomData,
    }
}

impl<V, A, F, K, C> Memoized<V, A, F, K, C>
where
    V: Clone,
    C: Clock,
    K: Fn(&A) -> String,
{
    /// Returns the cached value for `args`, running the producer on a miss.
    pub async fn call<Fut, E>(&self, args: A) -> Result<V, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = (self.key_fn)(&args);

        let cached = self.cache.write().await.get(&key);
        if let Some(value) = cached {
            return Ok(value);
        }

        let value = (self.producer)(args).await?;
        self.cache
            .write()
            .await
            .set(key, value.clone(), self.ttl);
        Ok(value)
    }

    /// The cache backing this wrapper.
    pub fn cache(&self) -> &SharedCache<V, C> {
        &self.cache
    }
}
