//! Formatting utilities used for CLI and export outputs.

use crate::models::user_settings::TimeFormat;
use chrono::{DateTime, Local, NaiveTime};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a non-negative minute count as "7h 30m" / "8h" / "45m".
/// Hours is floor division; the minutes component is rounded to the
/// nearest integer. Callers pass already-non-negative magnitudes.
pub fn format_duration(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as i64;
    let mins = (minutes % 60.0).round() as i64;

    if hours == 0 {
        return format!("{}m", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, mins)
}

/// Format a clock time under an explicit display preference.
/// 12h mode: no leading zero on the hour, AM/PM suffix.
/// 24h mode: zero-padded 24-hour clock.
pub fn format_clock(t: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::H12 => t.format("%-I:%M %p").to_string(),
        TimeFormat::H24 => t.format("%H:%M").to_string(),
    }
}

/// Format an absolute instant as a short clock string. The format is a
/// mandatory argument: resolving the user's preference belongs to the
/// caller, never to this function.
pub fn format_time(instant: &DateTime<Local>, format: TimeFormat) -> String {
    format_clock(instant.time(), format)
}
