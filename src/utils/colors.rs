//! ANSI color helper utilities for terminal output.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Color for a row total:
/// \>0 → green
/// \<0 → red (out before in)
/// 0 or empty → grey
pub fn color_for_hours(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v > 0.0 => GREEN,
        Some(v) if v < 0.0 => RED,
        _ => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Greys out placeholder times ("00:00") and empty cells.
pub fn colorize_time(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "00:00" {
        colorize(value, GREY)
    } else {
        value.to_string()
    }
}
