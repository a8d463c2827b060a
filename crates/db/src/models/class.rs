//! Class placement models and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use tierlist_core::board::ClassRow;
use tierlist_core::error::CoreError;

/// A class joined with its category and tier names, as read by
/// [`crate::repositories::ClassRepo::list`].
#[derive(Debug, Clone, FromRow)]
pub struct ClassPlacement {
    pub name: String,
    pub category: String,
    pub tier: String,
    pub mpm: f64,
}

impl ClassPlacement {
    /// Convert to a typed placement row.
    ///
    /// The category and tier columns reference the seeded lookup tables, so
    /// a name that fails to parse means the store is inconsistent, not that
    /// the request was bad.
    pub fn into_row(self) -> Result<ClassRow, CoreError> {
        let category = self
            .category
            .parse()
            .map_err(|_| CoreError::Internal(format!("Unknown category row '{}'", self.category)))?;
        let tier = self
            .tier
            .parse()
            .map_err(|_| CoreError::Internal(format!("Unknown tier row '{}'", self.tier)))?;
        Ok(ClassRow {
            category,
            tier,
            name: self.name,
            mpm: self.mpm,
        })
    }
}

/// Request payload for class upserts (POST /classes, each bulk item, and the
/// body of PUT /classes/{name}).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertClass {
    pub name: String,
    pub category: String,
    pub tier: String,
    #[serde(default)]
    pub mpm: Option<f64>,
}
