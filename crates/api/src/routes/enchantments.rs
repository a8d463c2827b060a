//! Route definitions for enchantment sets, mounted at `/api/enchantments`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::enchantments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(enchantments::create_enchantments))
        .route(
            "/{class_name}",
            get(enchantments::get_enchantments).put(enchantments::update_enchantments),
        )
}
