//! Pattern detection over logged nights. Everything here degrades to
//! "no suggestion" below its data threshold.

use crate::models::sleep_record::SleepRecord;
use crate::utils::date::weekday_name;
use std::collections::HashMap;

/// Rated nights needed before the cycle-duration optimizer speaks up.
const MIN_RATED_NIGHTS: usize = 5;
/// Nights per duration bucket needed to trust its average.
const MIN_BUCKET_SIZE: usize = 3;

pub struct InsightsLogic;

impl InsightsLogic {
    /// Suggest a personalized cycle duration from wake-quality ratings.
    ///
    /// Groups rated nights by their observed minutes-per-cycle and picks
    /// the bucket with the best average rating, provided it has at least
    /// three nights. Returns `None` with fewer than five rated nights,
    /// or when the winner is the stock 90 minutes.
    pub fn suggest_cycle_duration(records: &[SleepRecord]) -> Option<i64> {
        let rated: Vec<&SleepRecord> = records
            .iter()
            .filter(|r| r.wake_quality_rating.is_some())
            .collect();
        if rated.len() < MIN_RATED_NIGHTS {
            return None;
        }

        let mut buckets: HashMap<i64, (i64, usize)> = HashMap::new();
        for r in rated {
            let Some(duration) = r.observed_cycle_duration() else {
                continue;
            };
            let entry = buckets.entry(duration).or_insert((0, 0));
            entry.0 += i64::from(r.wake_quality_rating.unwrap_or(0));
            entry.1 += 1;
        }

        let mut best_cycle = 90;
        let mut best_average = 0.0;
        let mut durations: Vec<&i64> = buckets.keys().collect();
        durations.sort();

        for duration in durations {
            let (total, count) = buckets[duration];
            let average = total as f64 / count as f64;
            if count >= MIN_BUCKET_SIZE && average > best_average {
                best_average = average;
                best_cycle = *duration;
            }
        }

        if best_cycle != 90 { Some(best_cycle) } else { None }
    }

    /// Human-readable observations for the dashboard. Empty with fewer
    /// than seven logged nights.
    pub fn build_insights(records: &[SleepRecord], cycle_duration: i64) -> Vec<String> {
        if records.len() < 7 {
            return Vec::new();
        }

        let mut insights = Vec::new();

        if let Some((worst_day, _)) = Self::worst_weekday(records) {
            let order = [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ];
            let idx = order.iter().position(|d| *d == worst_day).unwrap_or(0);
            let prev_day = order[(idx + 6) % 7];
            insights.push(format!(
                "You typically sleep worst on {}s. Try going to bed 30 minutes earlier on {} \
                 night.",
                worst_day, prev_day
            ));
        }

        if let Some((best_cycles, _)) = Self::best_cycle_count(records) {
            let hours = (best_cycles * cycle_duration) as f64 / 60.0;
            insights.push(format!(
                "You feel best after {} cycles ({:.1} hours) of sleep based on your wake quality \
                 ratings.",
                best_cycles, hours
            ));
        }

        let damage_control_count = records.iter().filter(|r| r.is_damage_control).count();
        if damage_control_count >= 3 {
            insights.push(format!(
                "You've used Damage Control {} times recently. Consider setting a consistent \
                 bedtime to avoid emergency situations.",
                damage_control_count
            ));
        }

        insights
    }

    /// Weekday with the highest average debt, counting weekdays with at
    /// least two nights.
    fn worst_weekday(records: &[SleepRecord]) -> Option<(&'static str, f64)> {
        let mut by_day: HashMap<&'static str, (i64, usize)> = HashMap::new();
        for r in records {
            let entry = by_day.entry(weekday_name(r.date)).or_insert((0, 0));
            entry.0 += r.debt_minutes;
            entry.1 += 1;
        }

        let mut worst: Option<(&'static str, f64)> = None;
        for (day, (total, count)) in by_day {
            if count < 2 {
                continue;
            }
            let average = total as f64 / count as f64;
            if average > 0.0 && worst.is_none_or(|(_, w)| average > w) {
                worst = Some((day, average));
            }
        }
        worst
    }

    /// Cycle count with the best average wake quality (>=5 rated nights,
    /// >=2 ratings per cycle-count bucket).
    fn best_cycle_count(records: &[SleepRecord]) -> Option<(i64, f64)> {
        let rated: Vec<&SleepRecord> = records
            .iter()
            .filter(|r| r.wake_quality_rating.is_some())
            .collect();
        if rated.len() < MIN_RATED_NIGHTS {
            return None;
        }

        let mut by_cycles: HashMap<i64, Vec<u8>> = HashMap::new();
        for r in rated {
            by_cycles
                .entry(r.cycles)
                .or_default()
                .push(r.wake_quality_rating.unwrap_or(0));
        }

        let mut best: Option<(i64, f64)> = None;
        for (cycles, ratings) in by_cycles {
            if cycles == 0 || ratings.len() < 2 {
                continue;
            }
            let average =
                ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
            if best.is_none_or(|(_, b)| average > b) {
                best = Some((cycles, average));
            }
        }
        best
    }
}
