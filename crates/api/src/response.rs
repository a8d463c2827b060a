//! Shared response envelope types for API handlers.
//!
//! All success responses use the `{"success": true, ...}` envelope. Use
//! these types instead of ad-hoc `serde_json::json!` blocks to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{"success": true, "data": T}` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard `{"success": true, "message": ...}` response envelope for
/// mutations that return no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
