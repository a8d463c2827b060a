//! Route definitions for map modifiers, mounted at `/api/maps`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::maps;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(maps::list_maps).post(maps::upsert_map))
        .route("/bulk", post(maps::bulk_upsert_maps))
        .route("/{name}", delete(maps::delete_map))
}
