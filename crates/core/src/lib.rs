//! Domain layer for the tier-list system.
//!
//! Zero internal dependencies so the types can be shared by the API server,
//! the database layer, and the client library: category/tier enumerations,
//! the input sanitizer, and the two-level tier-board grouping with its
//! invariant helpers.

pub mod board;
pub mod error;
pub mod sanitize;
pub mod types;
