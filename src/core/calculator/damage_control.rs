//! Damage-control mode: the emergency decision procedure for a hard wake
//! deadline. Three tiers with two sub-branches; the tie-break rule is to
//! always prefer the maximum number of complete cycles over a partial
//! cycle, and never recommend sleep shorter than 20 minutes.

use crate::models::user_settings::{SleepSettings, TimeFormat};
use crate::utils::formatting::format_time;
use chrono::{DateTime, Duration, Local};

const MIN_USEFUL_WINDOW_MINUTES: i64 = 30;
const POWER_NAP_MINUTES: i64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct DamageControlResult {
    pub can_sleep: bool,
    pub cycles: i64,
    pub sleep_until: Option<DateTime<Local>>,
    pub total_minutes: Option<i64>,
    pub recommendation: String,
    pub warning: Option<String>,
}

/// Best achievable sleep between `now` and a fixed wake deadline.
///
/// The recommendation strings embed clock times, so the display format is
/// an explicit parameter; this function never consults ambient state.
pub fn compute_damage_control(
    now: DateTime<Local>,
    wake_deadline: DateTime<Local>,
    settings: &SleepSettings,
    time_format: TimeFormat,
) -> DamageControlResult {
    let available_minutes = (wake_deadline - now).num_minutes();

    // Less than 30 minutes: sleeping now makes things worse.
    if available_minutes < MIN_USEFUL_WINDOW_MINUTES {
        return DamageControlResult {
            can_sleep: false,
            cycles: 0,
            sleep_until: None,
            total_minutes: None,
            recommendation: "Don't sleep. At this point, 30 minutes or less will make you feel \
                             worse. Stay awake and take a 20-minute power nap later in the day."
                .to_string(),
            warning: Some("Critical: Less than 30 minutes available".to_string()),
        };
    }

    // Minutes actually available for sleep once asleep.
    let effective_minutes = available_minutes - settings.fall_asleep_time;
    let complete_cycles = effective_minutes / settings.cycle_duration;

    if complete_cycles >= 1 {
        let sleep_duration = complete_cycles * settings.cycle_duration + settings.fall_asleep_time;
        let sleep_until = now + Duration::minutes(sleep_duration);
        let remainder_minutes = effective_minutes - complete_cycles * settings.cycle_duration;

        let warning = if remainder_minutes > 30 {
            Some(format!(
                "You have {} extra minutes. Consider setting alarm for {} to wake between cycles.",
                remainder_minutes,
                format_time(&sleep_until, time_format)
            ))
        } else {
            None
        };

        return DamageControlResult {
            can_sleep: true,
            cycles: complete_cycles,
            sleep_until: Some(sleep_until),
            total_minutes: Some(complete_cycles * settings.cycle_duration),
            recommendation: format!(
                "Sleep now until {} = {} complete cycle{}. This is optimal - you'll wake between \
                 cycles.",
                format_time(&sleep_until, time_format),
                complete_cycles,
                if complete_cycles > 1 { "s" } else { "" }
            ),
            warning,
        };
    }

    // Less than one complete cycle but room for a power nap.
    if effective_minutes >= POWER_NAP_MINUTES && effective_minutes < settings.cycle_duration {
        let nap_until = now + Duration::minutes(POWER_NAP_MINUTES + settings.fall_asleep_time);

        return DamageControlResult {
            can_sleep: true,
            cycles: 0,
            sleep_until: Some(nap_until),
            total_minutes: Some(POWER_NAP_MINUTES),
            recommendation: format!(
                "Take a 20-minute power nap until {}. Not enough time for a full cycle, but this \
                 will help you function better.",
                format_time(&nap_until, time_format)
            ),
            warning: Some("Less than one full cycle available".to_string()),
        };
    }

    DamageControlResult {
        can_sleep: false,
        cycles: 0,
        sleep_until: None,
        total_minutes: None,
        recommendation: "Stay awake and take a 20-minute power nap later in the day when possible."
            .to_string(),
        warning: None,
    }
}
