//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers sanitize and validate inbound fields, delegate to the
//! corresponding repository in `tierlist_db`, and map errors via
//! [`crate::error::AppError`].

pub mod classes;
pub mod enchantments;
pub mod maps;
