//! Nap logging: fixed durations, fixed debt credits.

use crate::errors::{AppError, AppResult};
use crate::models::nap_record::{NapRecord, NapType};
use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};

pub struct NapLogic;

impl NapLogic {
    /// Build a nap record starting at `at` (default: now). A start time
    /// more than an hour in the future is assumed to mean yesterday.
    pub fn build_record(
        kind: NapType,
        at: Option<NaiveTime>,
        now: DateTime<Local>,
        id: String,
    ) -> AppResult<NapRecord> {
        let start = match at {
            None => now,
            Some(t) => {
                let candidate = Local
                    .from_local_datetime(&now.date_naive().and_time(t))
                    .single()
                    .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

                if candidate > now + Duration::hours(1) {
                    candidate - Duration::days(1)
                } else {
                    candidate
                }
            }
        };

        Ok(NapRecord::new(id, start, kind))
    }
}
