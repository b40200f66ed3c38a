use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One logged night of sleep, stored as a JSON blob in the record store.
///
/// Invariants: `bedtime < wake_time`, `debt_minutes >= 0`, `cycles >= 0`
/// and is always the floor of complete cycles, never rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub id: String,
    /// Calendar day the sleep session is attributed to.
    pub date: NaiveDate,
    pub bedtime: DateTime<Local>,
    /// `bedtime + fall_asleep_time`: when sleep is assumed to start.
    pub estimated_sleep_time: DateTime<Local>,
    pub wake_time: DateTime<Local>,
    /// `wake_time - estimated_sleep_time`, clamped to [0, 1440].
    pub total_sleep_minutes: i64,
    /// Snapshot of the settings value at logging time.
    pub ideal_sleep_minutes: i64,
    /// `max(0, ideal_sleep_minutes - total_sleep_minutes)`.
    pub debt_minutes: i64,
    /// Complete cycles only: `floor(total_sleep_minutes / cycle_duration)`.
    pub cycles: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_quality_rating: Option<u8>,
    #[serde(default)]
    pub is_damage_control: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SleepRecord {
    /// Observed minutes per cycle for this night, used by the
    /// cycle-duration optimizer. `None` when no complete cycle was slept.
    pub fn observed_cycle_duration(&self) -> Option<i64> {
        if self.cycles > 0 {
            Some((self.total_sleep_minutes as f64 / self.cycles as f64).round() as i64)
        } else {
            None
        }
    }
}
