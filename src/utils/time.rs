//! Time utilities: parsing HH:MM, minute arithmetic between instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end - start).num_minutes()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
