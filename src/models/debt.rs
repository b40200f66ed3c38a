use crate::utils::colors::{GREEN, MAGENTA, RED, YELLOW};
use serde::Serialize;

/// Severity tier for an accumulated sleep-debt total.
///
/// Boundaries in hours: <2 good, <7 caution, <14 moderate, else critical.
/// Upper bounds are exclusive: exactly 7.0h is Moderate, not Caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtLevel {
    Good,
    Caution,
    Moderate,
    Critical,
}

impl DebtLevel {
    pub fn from_minutes(total_debt_minutes: i64) -> Self {
        if total_debt_minutes < 2 * 60 {
            DebtLevel::Good
        } else if total_debt_minutes < 7 * 60 {
            DebtLevel::Caution
        } else if total_debt_minutes < 14 * 60 {
            DebtLevel::Moderate
        } else {
            DebtLevel::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebtLevel::Good => "Good",
            DebtLevel::Caution => "Caution",
            DebtLevel::Moderate => "Moderate",
            DebtLevel::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DebtLevel::Good => GREEN,
            DebtLevel::Caution => YELLOW,
            DebtLevel::Moderate => MAGENTA,
            DebtLevel::Critical => RED,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DebtLevel::Good => "Your sleep debt is minimal. Keep maintaining good sleep habits!",
            DebtLevel::Caution => {
                "Sleep debt is accumulating. Consider sleeping 30 minutes earlier."
            }
            DebtLevel::Moderate => "Significant debt detected. You need a recovery plan soon.",
            DebtLevel::Critical => "Critical sleep debt! Prioritize recovery this weekend.",
        }
    }

    /// Extra minutes of earlier bedtime suggested by the planner at this
    /// tier (the debt-adjusted recommendation).
    pub fn recovery_buffer_minutes(&self) -> i64 {
        match self {
            DebtLevel::Good => 0,
            DebtLevel::Caution => 30,
            DebtLevel::Moderate => 60,
            DebtLevel::Critical => 90,
        }
    }
}
