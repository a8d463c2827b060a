//! Route definitions.
//!
//! [`api_routes`] aggregates the per-resource routers under the `/api`
//! base path; health stays at root level.

pub mod classes;
pub mod enchantments;
pub mod health;
pub mod maps;

use axum::Router;

use crate::state::AppState;

/// Aggregate API routes, mounted under `/api`.
///
/// ```text
/// /classes                 list, upsert (GET, POST)
/// /classes/bulk            bulk upsert (POST)
/// /classes/{name}          update, delete (PUT, DELETE)
///
/// /maps                    list, upsert (GET, POST)
/// /maps/bulk               bulk upsert (POST)
/// /maps/{name}             delete (DELETE)
///
/// /enchantments            create (POST)
/// /enchantments/{class}    get, partial update (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/classes", classes::router())
        .nest("/maps", maps::router())
        .nest("/enchantments", enchantments::router())
}
