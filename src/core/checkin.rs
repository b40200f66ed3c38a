//! Morning check-in: attach a wake-quality rating to the night the user
//! just woke up from.

use crate::errors::{AppError, AppResult};
use crate::models::sleep_record::SleepRecord;
use chrono::NaiveDate;

pub struct CheckinLogic;

impl CheckinLogic {
    /// Rate the record woken up on `today`. Targets the latest record
    /// whose wake time falls on that day; the caller persists the
    /// returned record (same id, so the save replaces it).
    pub fn apply(
        records: &[SleepRecord],
        today: NaiveDate,
        rating: u8,
        notes: Option<String>,
    ) -> AppResult<SleepRecord> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::InvalidRating(rating));
        }

        let mut target: Option<&SleepRecord> = None;
        for r in records {
            if r.wake_time.date_naive() == today
                && target.is_none_or(|t| r.wake_time > t.wake_time)
            {
                target = Some(r);
            }
        }

        let mut updated = target
            .ok_or_else(|| AppError::NoRecordForDate(today.to_string()))?
            .clone();
        updated.wake_quality_rating = Some(rating);
        if notes.is_some() {
            updated.notes = notes;
        }

        Ok(updated)
    }

    pub fn rating_label(rating: u8) -> &'static str {
        match rating {
            1 => "Exhausted",
            2 => "Tired",
            3 => "Acceptable",
            4 => "Good",
            _ => "Excellent",
        }
    }
}
