use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryKind {
    /// Steady: a little extra sleep every night.
    Progressive,
    /// Fast but demanding: weekend catch-up plus daily naps.
    Intensive,
}

/// A recovery strategy sized against the current debt total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPlan {
    pub kind: RecoveryKind,
    pub debt_to_recover_minutes: i64,
    pub duration_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_extra_sleep_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_extra_sleep_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naps_per_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nap_duration_minutes: Option<i64>,
    pub description: &'static str,
    pub estimated_recovery_days: i64,
}
