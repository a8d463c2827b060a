//! Route definitions for class placements, mounted at `/api/classes`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list_classes).post(classes::upsert_class))
        .route("/bulk", post(classes::bulk_upsert_classes))
        .route(
            "/{name}",
            put(classes::update_class).delete(classes::delete_class),
        )
}
