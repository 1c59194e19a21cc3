//! API Module
//!
//! HTTP handlers and routing over the named caches.
//!
//! # Endpoints
//! - `PUT /caches/:name/entries` - Store a key-value pair
//! - `GET /caches/:name/entries/:key` - Retrieve a value by key
//! - `GET /caches/:name/entries/:key/exists` - Check for a fresh entry
//! - `DELETE /caches/:name/entries/:key` - Delete a key
//! - `DELETE /caches/:name` - Clear one cache
//! - `GET /caches/:name/stats` - Statistics for one cache
//! - `GET /stats` - Statistics for every cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
