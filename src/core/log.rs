//! High-level business logic for the `log` command: turn an explicit
//! date plus HH:MM bedtime/wake pair into a full sleep record.

use crate::core::calculator::cycles::compute_night_debt;
use crate::errors::{AppError, AppResult};
use crate::models::sleep_record::SleepRecord;
use crate::models::user_settings::UserSettings;
use crate::utils::time::minutes_between;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Raw input for one night, as collected by the CLI.
#[derive(Debug, Clone)]
pub struct NightInput {
    /// Calendar day of the wake time.
    pub wake_date: NaiveDate,
    pub bedtime: NaiveTime,
    pub wake_time: NaiveTime,
    pub fall_asleep_override: Option<i64>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
    pub is_damage_control: bool,
}

pub struct LogLogic;

impl LogLogic {
    /// Build a validated [`SleepRecord`].
    ///
    /// Date attribution is resolved here, not in the calculator: the wake
    /// instant lives on `wake_date`, and a bedtime at or after the wake
    /// clock time belongs to the previous day. A window that is not
    /// strictly positive, or longer than 24 hours, yields
    /// "no calculation available" instead of a record.
    pub fn build_record(
        input: &NightInput,
        settings: &UserSettings,
        id: String,
    ) -> AppResult<SleepRecord> {
        let wake = local_datetime(input.wake_date, input.wake_time)?;

        let bed_date = if input.bedtime >= input.wake_time {
            input
                .wake_date
                .pred_opt()
                .ok_or_else(|| AppError::InvalidDate(input.wake_date.to_string()))?
        } else {
            input.wake_date
        };
        let bedtime = local_datetime(bed_date, input.bedtime)?;

        let minutes_in_bed = minutes_between(bedtime, wake);
        if minutes_in_bed <= 0 || minutes_in_bed > 1440 {
            return Err(AppError::InvalidSleepWindow(format!(
                "bedtime {} to wake {} spans {} minutes",
                input.bedtime, input.wake_time, minutes_in_bed
            )));
        }

        if let Some(r) = input.rating
            && !(1..=5).contains(&r)
        {
            return Err(AppError::InvalidRating(r));
        }

        let fall_asleep = input
            .fall_asleep_override
            .unwrap_or(settings.fall_asleep_time)
            .clamp(0, 120);

        let estimated_sleep_time = bedtime + Duration::minutes(fall_asleep);
        let total_sleep_minutes = (minutes_in_bed - fall_asleep).clamp(0, 1440);

        let ideal_sleep_minutes = settings.ideal_sleep_minutes();

        Ok(SleepRecord {
            id,
            date: estimated_sleep_time.date_naive(),
            bedtime,
            estimated_sleep_time,
            wake_time: wake,
            total_sleep_minutes,
            ideal_sleep_minutes,
            debt_minutes: compute_night_debt(total_sleep_minutes, ideal_sleep_minutes),
            cycles: total_sleep_minutes / settings.cycle_duration,
            wake_quality_rating: input.rating,
            is_damage_control: input.is_damage_control,
            notes: input.notes.clone(),
        })
    }
}

fn local_datetime(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| AppError::InvalidTime(format!("{} {}", date, time)))
}
