//! Client-side logic for the tier-list UI, expressed as a library.
//!
//! The rendering layer is deliberately absent: this crate owns the HTTP
//! client, the in-memory board cache with its pure state transitions, the
//! enchantment-panel state machine, and the small helpers (debounce,
//! bounded retry, notifications) the UI loop composes around them.

pub mod api;
pub mod debounce;
pub mod notify;
pub mod panel;
pub mod retry;
pub mod state;
