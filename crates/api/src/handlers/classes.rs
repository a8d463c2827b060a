//! Handlers for class placements.
//!
//! Classes are keyed by name across the whole system: an upsert with an
//! existing name overwrites that class's category, tier, and mpm.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tierlist_core::board::TierBoard;
use tierlist_core::error::CoreError;
use tierlist_core::sanitize::sanitize;
use tierlist_core::types::{Category, Tier};
use tierlist_db::models::class::UpsertClass;
use tierlist_db::repositories::{ClassRepo, ClassWrite};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// A fully sanitized and validated placement request.
struct ValidPlacement {
    name: String,
    category: Category,
    tier: Tier,
    mpm: f64,
}

/// Sanitize and validate one placement payload.
///
/// Category and tier are matched against their fixed enumerations after
/// sanitization; a name outside the set is invalid input, not a missing row.
fn validate_placement(input: &UpsertClass) -> Result<ValidPlacement, AppError> {
    let name = sanitize(&input.name);
    if name.is_empty() {
        return Err(AppError::BadRequest("Class name is required".into()));
    }

    let category: Category = sanitize(&input.category).parse()?;
    let tier: Tier = sanitize(&input.tier).parse()?;

    let mpm = input.mpm.unwrap_or(0.0);
    if !mpm.is_finite() || mpm < 0.0 {
        return Err(AppError::BadRequest(
            "MPM must be a non-negative number".into(),
        ));
    }

    Ok(ValidPlacement {
        name,
        category,
        tier,
        mpm,
    })
}

/// GET /api/classes
///
/// All placements grouped category → tier → ordered `{name, mpm}` entries.
pub async fn list_classes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ClassRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|placement| placement.into_row())
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Json(DataResponse::new(TierBoard::from_rows(rows))))
}

/// POST /api/classes
///
/// Insert a placement, or overwrite category/tier/mpm on name conflict.
pub async fn upsert_class(
    State(state): State<AppState>,
    payload: Result<Json<UpsertClass>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let placement = validate_placement(&input)?;

    match ClassRepo::upsert(
        &state.pool,
        &placement.name,
        placement.category,
        placement.tier,
        placement.mpm,
    )
    .await?
    {
        ClassWrite::Applied => {}
        _ => return Err(AppError::BadRequest("Invalid category or tier".into())),
    }

    tracing::info!(
        name = %placement.name,
        category = %placement.category,
        tier = %placement.tier,
        "Class saved",
    );

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Class saved"))))
}

/// Response for POST /api/classes/bulk.
#[derive(Debug, Serialize)]
struct BulkClassesResponse {
    success: bool,
    processed: u64,
}

/// POST /api/classes/bulk
///
/// Upsert each item independently. Items that fail validation are skipped
/// and logged rather than failing the batch; only store errors are fatal.
pub async fn bulk_upsert_classes(
    State(state): State<AppState>,
    payload: Result<Json<Vec<UpsertClass>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(items) = payload?;

    let mut processed = 0u64;
    for item in items {
        let placement = match validate_placement(&item) {
            Ok(placement) => placement,
            Err(err) => {
                tracing::warn!(name = %item.name, %err, "Skipping invalid bulk class item");
                continue;
            }
        };

        match ClassRepo::upsert(
            &state.pool,
            &placement.name,
            placement.category,
            placement.tier,
            placement.mpm,
        )
        .await?
        {
            ClassWrite::Applied => processed += 1,
            _ => {
                tracing::warn!(name = %placement.name, "Skipping bulk class item with unresolved category/tier");
            }
        }
    }

    Ok(Json(BulkClassesResponse {
        success: true,
        processed,
    }))
}

/// PUT /api/classes/{name}
///
/// Update (and possibly rename) the class currently called `name`.
pub async fn update_class(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<UpsertClass>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let current_name = sanitize(&name);
    let Json(input) = payload?;
    let placement = validate_placement(&input)?;

    match ClassRepo::rename(
        &state.pool,
        &current_name,
        &placement.name,
        placement.category,
        placement.tier,
        placement.mpm,
    )
    .await?
    {
        ClassWrite::Applied => {}
        ClassWrite::NoSuchClass => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Class",
                name: current_name,
            }));
        }
        ClassWrite::UnresolvedRefs => {
            return Err(AppError::BadRequest("Invalid category or tier".into()));
        }
    }

    tracing::info!(from = %current_name, to = %placement.name, "Class updated");

    Ok(Json(MessageResponse::new("Class updated")))
}

/// DELETE /api/classes/{name}
pub async fn delete_class(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let name = sanitize(&name);

    if !ClassRepo::delete(&state.pool, &name).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            name,
        }));
    }

    tracing::info!(%name, "Class removed");

    Ok(Json(MessageResponse::new("Class removed")))
}
