/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Placeholder shown for missing cells in the raw data table.
pub const MISSING: &str = "--";

/// Render an optional cell, greying out the placeholder when absent.
pub fn colorize_optional<T: AsRef<str>>(value: Option<T>) -> String {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => v.as_ref().to_string(),
        _ => format!("{GREY}{MISSING}{RESET}"),
    }
}
