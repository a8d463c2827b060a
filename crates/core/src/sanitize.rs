//! Free-text input sanitizer.
//!
//! Every string that reaches storage or display passes through here first.
//! The function is total and deterministic: any input, however hostile,
//! yields a plain string of at most [`MAX_LEN`] characters containing only
//! ASCII word characters, whitespace, `.` and `-`.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a sanitized value, in characters.
pub const MAX_LEN: usize = 50;

fn markup_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"))
}

/// Sanitize arbitrary text for storage and display.
///
/// Markup runs are removed first, then the characters `< > & " '`, then any
/// character outside ASCII word characters, whitespace, `.` and `-`. The
/// result is trimmed and truncated to [`MAX_LEN`] characters. Empty input
/// yields an empty string.
pub fn sanitize(input: &str) -> String {
    let stripped = markup_pattern().replace_all(input, "");

    let cleaned: String = stripped
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\''))
        .filter(|c| {
            c.is_ascii_alphanumeric() || *c == '_' || *c == '.' || *c == '-' || c.is_whitespace()
        })
        .collect();

    cleaned.trim().chars().take(MAX_LEN).collect()
}

/// Sanitize an optional field, mapping values that sanitize to nothing to
/// `None`. Used for enchantment fields, which are stored as absent rather
/// than empty.
pub fn sanitize_nonempty(input: Option<&str>) -> Option<String> {
    let value = sanitize(input?);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
