//! Shared utility functions used across multiple modules.

/// Truncate text to at most `max` characters.
///
/// Counts `char`s rather than bytes so multi-byte text is never split.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Parse a user-entered toggle value.
///
/// Accepts the usual spellings (`true`/`false`, `1`/`0`, `yes`/`no`,
/// `on`/`off`) case-insensitively.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
