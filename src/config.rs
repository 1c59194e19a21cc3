//! Configuration Module
//!
//! Handles loading and managing server and cache configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Sizing for one named cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    pub default_ttl_ms: u64,
}

impl CacheConfig {
    pub const fn new(max_size: usize, default_ttl_ms: u64) -> Self {
        Self {
            max_size,
            default_ttl_ms,
        }
    }

    /// Reads `{prefix}_MAX_SIZE` and `{prefix}_TTL_MS`, falling back to `defaults`.
    fn from_env(prefix: &str, defaults: Self) -> Self {
        Self {
            max_size: env_or(&format!("{prefix}_MAX_SIZE"), defaults.max_size),
            default_ttl_ms: env_or(&format!("{prefix}_TTL_MS"), defaults.default_ttl_ms),
        }
    }
}

const API_CACHE_DEFAULTS: CacheConfig = CacheConfig::new(500, 5 * 60 * 1000);
const USER_CACHE_DEFAULTS: CacheConfig = CacheConfig::new(1000, 10 * 60 * 1000);
const STATIC_CACHE_DEFAULTS: CacheConfig = CacheConfig::new(100, 60 * 60 * 1000);

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup interval in milliseconds, 0 disables the task
    pub cleanup_interval_ms: u64,
    /// Downstream API response cache
    pub api_cache: CacheConfig,
    /// User profile cache
    pub user_cache: CacheConfig,
    /// Static content cache
    pub static_cache: CacheConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL_MS` - Background sweep interval, 0 = off (default: 0)
    /// - `API_CACHE_MAX_SIZE` / `API_CACHE_TTL_MS` (default: 500 / 300000)
    /// - `USER_CACHE_MAX_SIZE` / `USER_CACHE_TTL_MS` (default: 1000 / 600000)
    /// - `STATIC_CACHE_MAX_SIZE` / `STATIC_CACHE_TTL_MS` (default: 100 / 3600000)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            cleanup_interval_ms: env_or("CLEANUP_INTERVAL_MS", 0),
            api_cache: CacheConfig::from_env("API_CACHE", API_CACHE_DEFAULTS),
            user_cache: CacheConfig::from_env("USER_CACHE", USER_CACHE_DEFAULTS),
            static_cache: CacheConfig::from_env("STATIC_CACHE", STATIC_CACHE_DEFAULTS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval_ms: 0,
            api_cache: API_CACHE_DEFAULTS,
            user_cache: USER_CACHE_DEFAULTS,
            static_cache: STATIC_CACHE_DEFAULTS,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
