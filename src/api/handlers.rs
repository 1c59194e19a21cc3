//! API Handlers
//!
//! HTTP request handlers that use the named caches directly.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheRegistry, SharedCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    validate_key, AllStatsResponse, ClearResponse, DeleteResponse, ExistsResponse, GetResponse,
    HealthResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Named caches
    pub caches: CacheRegistry,
}

impl AppState {
    /// Creates a new AppState over the given registry.
    pub fn new(caches: CacheRegistry) -> Self {
        Self { caches }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheRegistry::from_config(config))
    }

    fn cache(&self, name: &str) -> Result<SharedCache<serde_json::Value>> {
        self.caches
            .get(name)
            .ok_or_else(|| ApiError::UnknownCache(name.to_string()))
    }
}

fn check_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(error_msg) => Err(ApiError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /caches/:name/entries
pub async fn set_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let cache = state.cache(&name)?;
    cache.write().await.set(req.key.clone(), req.value, req.ttl);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /caches/:name/entries/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    check_key(&key)?;
    let cache = state.cache(&name)?;

    // Write lock: a read bumps the hit count
    let mut cache = cache.write().await;
    match cache.get(&key) {
        Some(value) => {
            let ttl_remaining_ms = cache.ttl_remaining(&key).unwrap_or_default();
            Ok(Json(GetResponse::new(key, value, ttl_remaining_ms)))
        }
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for GET /caches/:name/entries/:key/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<ExistsResponse>> {
    check_key(&key)?;
    let cache = state.cache(&name)?;
    let exists = cache.write().await.has(&key);

    Ok(Json(ExistsResponse { key, exists }))
}

/// Handler for DELETE /caches/:name/entries/:key
///
/// Succeeds whether or not the key was present.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    check_key(&key)?;
    let cache = state.cache(&name)?;
    let deleted = cache.write().await.delete(&key);

    Ok(Json(DeleteResponse { key, deleted }))
}

/// Handler for DELETE /caches/:name
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ClearResponse>> {
    let cache = state.cache(&name)?;
    cache.write().await.clear();

    Ok(Json(ClearResponse::new(&name)))
}

/// Handler for GET /caches/:name/stats
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StatsResponse>> {
    let cache = state.cache(&name)?;
    let stats = cache.read().await.stats();

    Ok(Json(StatsResponse { cache: name, stats }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<AllStatsResponse> {
    Json(AllStatsResponse {
        caches: state.caches.stats().await,
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
