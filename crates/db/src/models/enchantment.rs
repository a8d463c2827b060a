//! Enchantment set models and DTOs.
//!
//! One row per class name with four independently optional slot values.
//! The wire name of the class-slot field is `class`, kept here under a
//! Rust-friendly field name via serde/sqlx renames.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `enchantments` table, minus bookkeeping columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnchantmentSet {
    pub weapon: Option<String>,
    #[sqlx(rename = "class")]
    #[serde(rename = "class")]
    pub class_slot: Option<String>,
    pub helm: Option<String>,
    pub cape: Option<String>,
}

/// Request payload for POST /enchantments.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnchantments {
    #[serde(rename = "className")]
    pub class_name: String,
    pub weapon: Option<String>,
    #[serde(rename = "class")]
    pub class_slot: Option<String>,
    pub helm: Option<String>,
    pub cape: Option<String>,
}

/// Request payload for PUT /enchantments/{className}: any subset of the
/// four slots. Fields left `None` are not touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEnchantments {
    pub weapon: Option<String>,
    #[serde(rename = "class")]
    pub class_slot: Option<String>,
    pub helm: Option<String>,
    pub cape: Option<String>,
}
