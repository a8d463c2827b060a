//! Transient user notifications.
//!
//! Every non-success API response maps to one of these; the UI shows the
//! message and dismisses it after [`DISMISS_AFTER`]. No state accumulates.

use std::time::Duration;

use crate::api::ApiError;

/// How long a notification stays on screen before auto-dismissing.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient, auto-dismissing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

impl From<&ApiError> for Notification {
    /// Server rejections carry the envelope message; transport failures get
    /// a generic retry hint since their detail helps nobody at the screen.
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Rejected { message, .. } => Notification::error(message.clone()),
            ApiError::Request(_) => {
                Notification::error("Could not reach the server. Try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_surface_the_server_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Invalid tier 'Z'".into(),
        };
        let notification = Notification::from(&err);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, "Invalid tier 'Z'");
    }
}
