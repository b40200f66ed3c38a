/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Night-debt color:
/// 0 → green
/// \>0 → yellow
/// \>= 2h → red
pub fn color_for_debt(minutes: i64) -> &'static str {
    if minutes == 0 {
        GREEN
    } else if minutes < 120 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out empty or placeholder values in table cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" || value.trim() == "0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
