//! Pure sleep-cycle arithmetic: bedtime planning, cycle targets and
//! per-night debt. Every function here is a pure function of its inputs.

use crate::models::debt::DebtLevel;
use crate::models::user_settings::SleepSettings;
use chrono::{DateTime, Duration, Local};

/// Average minutes of debt recovered per night when sleeping with the
/// suggested buffer; used to estimate how long repayment takes.
const RECOVERY_PER_NIGHT_MINUTES: f64 = 35.0;

/// A bedtime recommendation aligned to whole sleep cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepPlan {
    pub bedtime: DateTime<Local>,
    pub wake_time: DateTime<Local>,
    pub cycles: i64,
    pub total_sleep_minutes: i64,
}

/// The debt-aware variant of a plan: go to bed earlier by a tier-sized
/// buffer to chip away at accumulated debt.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtAdjustedPlan {
    pub bedtime: DateTime<Local>,
    pub estimated_sleep_time: DateTime<Local>,
    pub total_sleep_minutes: i64,
    pub recovery_buffer_minutes: i64,
    pub estimated_recovery_nights: i64,
}

/// Optimal bedtime for a target wake time and cycle count.
///
/// `total_sleep_minutes = target_cycles * cycle_duration`;
/// `bedtime = wake_time - (total_sleep_minutes + fall_asleep_time)`.
/// Any positive cycle count is accepted; the CLI constrains the typical
/// 3-6 range.
pub fn compute_bedtime(
    wake_time: DateTime<Local>,
    target_cycles: i64,
    settings: &SleepSettings,
) -> SleepPlan {
    let total_sleep_minutes = target_cycles * settings.cycle_duration;
    let total_minutes_needed = total_sleep_minutes + settings.fall_asleep_time;

    SleepPlan {
        bedtime: wake_time - Duration::minutes(total_minutes_needed),
        wake_time,
        cycles: target_cycles,
        total_sleep_minutes,
    }
}

/// Suggested cycle count for the user's ideal sleep duration.
///
/// Rounds to nearest, unlike a record's cycle count which floors: this
/// estimates a target, the record reports what actually happened.
pub fn compute_ideal_cycles(settings: &SleepSettings) -> i64 {
    ((settings.ideal_sleep_hours * 60.0) / settings.cycle_duration as f64).round() as i64
}

/// Debt accrued by a single night. Never negative: oversleeping the
/// ideal produces zero debt, not a credit.
pub fn compute_night_debt(actual_sleep_minutes: i64, ideal_sleep_minutes: i64) -> i64 {
    (ideal_sleep_minutes - actual_sleep_minutes).max(0)
}

/// Age-banded ideal sleep duration. Lower bounds are inclusive: age 18
/// falls in the 18-25 band.
pub fn recommended_ideal_sleep_hours(age: u32) -> f64 {
    if age < 18 {
        9.0 // teenagers: 8-10 hours
    } else if age < 26 {
        8.5 // young adults: 7-9 hours
    } else if age < 65 {
        8.0 // adults: 7-9 hours
    } else {
        7.5 // older adults: 7-8 hours
    }
}

/// Debt-adjusted companion to [`compute_bedtime`]: when debt is present,
/// move the bedtime earlier by the tier's recovery buffer and estimate
/// how many such nights repay the debt.
pub fn compute_debt_adjustment(
    plan: &SleepPlan,
    settings: &SleepSettings,
    current_debt_minutes: i64,
) -> Option<DebtAdjustedPlan> {
    if current_debt_minutes <= 0 {
        return None;
    }

    let buffer = DebtLevel::from_minutes(current_debt_minutes).recovery_buffer_minutes();
    if buffer == 0 {
        return None;
    }

    let bedtime = plan.bedtime - Duration::minutes(buffer);
    let estimated_sleep_time = bedtime + Duration::minutes(settings.fall_asleep_time);
    let total_sleep_minutes = (plan.wake_time - estimated_sleep_time).num_minutes();

    Some(DebtAdjustedPlan {
        bedtime,
        estimated_sleep_time,
        total_sleep_minutes,
        recovery_buffer_minutes: buffer,
        estimated_recovery_nights: (current_debt_minutes as f64 / RECOVERY_PER_NIGHT_MINUTES).ceil()
            as i64,
    })
}
