//! Handlers for per-class enchantment sets.
//!
//! A class has zero or one set. Absence is a normal state the client reads
//! as "offer creation", so GET returns `data: null` rather than 404.
//! Creation is rejected once a row exists; afterwards slots change only
//! through partial updates.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tierlist_core::error::CoreError;
use tierlist_core::sanitize::{sanitize, sanitize_nonempty};
use tierlist_db::models::enchantment::{CreateEnchantments, EnchantmentSet, UpdateEnchantments};
use tierlist_db::repositories::EnchantmentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/enchantments/{className}
///
/// The enchantment set for a class, or `data: null` when none exists.
pub async fn get_enchantments(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let class_name = sanitize(&class_name);
    let found = EnchantmentRepo::find_by_class(&state.pool, &class_name).await?;

    Ok(Json(DataResponse::new(found)))
}

/// POST /api/enchantments
///
/// Create the set for a class. Slot values that sanitize to nothing are
/// stored as absent. Rejected when the class already has a set.
pub async fn create_enchantments(
    State(state): State<AppState>,
    payload: Result<Json<CreateEnchantments>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let class_name = sanitize(&input.class_name);
    if class_name.is_empty() {
        return Err(AppError::BadRequest("Class name is required".into()));
    }

    let set = EnchantmentSet {
        weapon: sanitize_nonempty(input.weapon.as_deref()),
        class_slot: sanitize_nonempty(input.class_slot.as_deref()),
        helm: sanitize_nonempty(input.helm.as_deref()),
        cape: sanitize_nonempty(input.cape.as_deref()),
    };

    if EnchantmentRepo::exists(&state.pool, &class_name).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "An enchantment set already exists for '{class_name}'"
        ))));
    }

    EnchantmentRepo::create(&state.pool, &class_name, &set).await?;

    tracing::info!(%class_name, "Enchantment set created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Enchantment created")),
    ))
}

/// PUT /api/enchantments/{className}
///
/// Update any subset of the four slots. At least one provided slot must
/// survive sanitization; a class with no existing set is 404.
pub async fn update_enchantments(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
    payload: Result<Json<UpdateEnchantments>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let class_name = sanitize(&class_name);
    let Json(input) = payload?;

    let set = EnchantmentSet {
        weapon: sanitize_nonempty(input.weapon.as_deref()),
        class_slot: sanitize_nonempty(input.class_slot.as_deref()),
        helm: sanitize_nonempty(input.helm.as_deref()),
        cape: sanitize_nonempty(input.cape.as_deref()),
    };

    if set.weapon.is_none() && set.class_slot.is_none() && set.helm.is_none() && set.cape.is_none()
    {
        return Err(AppError::BadRequest("No fields provided for update".into()));
    }

    if !EnchantmentRepo::update(&state.pool, &class_name, &set).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            name: class_name,
        }));
    }

    tracing::info!(%class_name, "Enchantment set updated");

    Ok(Json(MessageResponse::new("Enchantment updated")))
}
