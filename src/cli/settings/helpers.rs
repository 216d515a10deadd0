//! Helper functions for settings operations.

/// Parse a boolean value from user input.
///
/// Accepts: on/off, true/false, yes/no, 1/0 (case-insensitive).
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Format a boolean value for display.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Join the words after the key, or `None` when nothing non-blank was given.
pub fn joined_value(args: &[String]) -> Option<String> {
    let value = args.join(" ");
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
