//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the rows the repositories read
//! - `Deserialize` DTOs for the request payloads that feed writes

pub mod class;
pub mod enchantment;
pub mod map;
