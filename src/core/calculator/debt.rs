//! The debt ledger: a rolling-window aggregation of sleep records and
//! nap credits into one non-negative total.
//!
//! Recomputed from scratch on every query; there is no persisted
//! running total to drift out of sync.

use crate::models::nap_record::NapRecord;
use crate::models::sleep_record::SleepRecord;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_DEBT_WINDOW_DAYS: i64 = 14;

/// Total sleep debt in minutes over the trailing window ending at `today`.
///
/// Rules:
/// - no sleep records in the window → 0 (a new user has zero debt);
/// - records with `total_sleep_minutes <= 0` contribute nothing, even if
///   their own `debt_minutes` field is nonzero;
/// - nap credits are the records' fixed `debt_reduction` values;
/// - the result is clamped at zero: naps erase debt but never invert it
///   into a surplus.
pub fn total_debt(
    records: &[SleepRecord],
    naps: &[NapRecord],
    today: NaiveDate,
    window_days: i64,
) -> i64 {
    let cutoff = today - Duration::days(window_days);
    let in_window = |date: NaiveDate| date >= cutoff && date <= today;

    let windowed: Vec<&SleepRecord> = records.iter().filter(|r| in_window(r.date)).collect();
    if windowed.is_empty() {
        return 0;
    }

    let debt_sum: i64 = windowed
        .iter()
        .filter(|r| r.total_sleep_minutes > 0)
        .map(|r| r.debt_minutes)
        .sum();

    let nap_credits: i64 = naps
        .iter()
        .filter(|n| in_window(n.date))
        .map(|n| n.debt_reduction)
        .sum();

    (debt_sum - nap_credits).max(0)
}
