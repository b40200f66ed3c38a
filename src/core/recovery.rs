//! Recovery strategies sized against the current debt total.

use crate::models::recovery_plan::{RecoveryKind, RecoveryPlan};
use crate::utils::formatting::format_duration;

pub struct RecoveryLogic;

impl RecoveryLogic {
    pub fn build_plans(total_debt_minutes: i64) -> Vec<RecoveryPlan> {
        vec![
            RecoveryPlan {
                kind: RecoveryKind::Progressive,
                debt_to_recover_minutes: total_debt_minutes,
                duration_days: 14,
                daily_extra_sleep_minutes: Some(30),
                weekend_extra_sleep_minutes: None,
                naps_per_week: None,
                nap_duration_minutes: None,
                description: "Add 30 minutes of sleep each night for 2 weeks",
                estimated_recovery_days: 14,
            },
            RecoveryPlan {
                kind: RecoveryKind::Intensive,
                debt_to_recover_minutes: total_debt_minutes,
                duration_days: 7,
                daily_extra_sleep_minutes: None,
                weekend_extra_sleep_minutes: Some(120),
                naps_per_week: Some(5),
                nap_duration_minutes: Some(20),
                description: "Sleep 2 extra hours on weekends + daily 20-minute naps",
                estimated_recovery_days: 7,
            },
        ]
    }

    /// Afternoon power-nap nudge once debt passes five hours.
    pub fn nap_recommendation(total_debt_minutes: i64) -> Option<String> {
        if total_debt_minutes > 5 * 60 {
            Some(format!(
                "With {} of debt, you should take a 20-minute power nap today around 2-3 PM to \
                 help manage fatigue.",
                format_duration(total_debt_minutes as f64)
            ))
        } else {
            None
        }
    }
}
