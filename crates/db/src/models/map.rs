//! Map modifier models and DTOs.

use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `maps` table.
#[derive(Debug, Clone, FromRow)]
pub struct MapModifier {
    pub name: String,
    pub modifier: f64,
}

/// Request payload for map upserts (POST /maps and each bulk item).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertMap {
    pub name: String,
    pub modifier: f64,
}
