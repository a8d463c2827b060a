use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tierlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-client-address request budget for `/api` routes.
    pub rate_limiter: RateLimiter,
}
