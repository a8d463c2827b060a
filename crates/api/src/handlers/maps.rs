//! Handlers for map modifiers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use tierlist_core::error::CoreError;
use tierlist_core::sanitize::sanitize;
use tierlist_db::models::map::UpsertMap;
use tierlist_db::repositories::MapRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Sanitize and validate one map payload, yielding `(name, modifier)`.
fn validate_map(input: &UpsertMap) -> Result<(String, f64), AppError> {
    let name = sanitize(&input.name);
    if name.is_empty() || !input.modifier.is_finite() || input.modifier < 0.0 {
        return Err(AppError::BadRequest("Invalid map data".into()));
    }
    Ok((name, input.modifier))
}

/// GET /api/maps
///
/// All maps as a `{name: modifier}` object, sorted by name.
pub async fn list_maps(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let maps: IndexMap<String, f64> = MapRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|m| (m.name, m.modifier))
        .collect();

    Ok(Json(DataResponse::new(maps)))
}

/// POST /api/maps
///
/// Insert a map, or overwrite its modifier on name conflict.
pub async fn upsert_map(
    State(state): State<AppState>,
    payload: Result<Json<UpsertMap>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let (name, modifier) = validate_map(&input)?;

    MapRepo::upsert(&state.pool, &name, modifier).await?;

    tracing::info!(%name, modifier, "Map saved");

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Map saved"))))
}

/// Response for POST /api/maps/bulk.
#[derive(Debug, Serialize)]
struct BulkMapsResponse {
    success: bool,
    updated: u64,
}

/// POST /api/maps/bulk
///
/// Upsert each valid item; invalid items are dropped up front. A batch with
/// nothing valid in it is rejected outright.
pub async fn bulk_upsert_maps(
    State(state): State<AppState>,
    payload: Result<Json<Vec<UpsertMap>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(items) = payload?;

    let valid: Vec<(String, f64)> = items
        .iter()
        .filter_map(|item| match validate_map(item) {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(name = %item.name, %err, "Skipping invalid bulk map item");
                None
            }
        })
        .collect();

    if valid.is_empty() {
        return Err(AppError::BadRequest("No valid map data provided".into()));
    }

    let mut updated = 0u64;
    for (name, modifier) in &valid {
        MapRepo::upsert(&state.pool, name, *modifier).await?;
        updated += 1;
    }

    Ok(Json(BulkMapsResponse {
        success: true,
        updated,
    }))
}

/// DELETE /api/maps/{name}
pub async fn delete_map(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let name = sanitize(&name);

    if !MapRepo::delete(&state.pool, &name).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Map",
            name,
        }));
    }

    tracing::info!(%name, "Map removed");

    Ok(Json(MessageResponse::new("Map removed")))
}
