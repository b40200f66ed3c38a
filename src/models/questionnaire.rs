use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WakeFeeling {
    Exhausted,
    Tired,
    Acceptable,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Restorative {
    Yes,
    Partially,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Malaise {
    Never,
    Sometimes,
    Often,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskScore {
    Low,
    Medium,
    High,
}

impl RiskScore {
    pub fn rs_as_str(&self) -> &'static str {
        match self {
            RiskScore::Low => "low",
            RiskScore::Medium => "medium",
            RiskScore::High => "high",
        }
    }
}

/// One weekly self-report. Created on submission, never mutated; the
/// fatigue-alert check only consults the four most recent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyQuestionnaire {
    pub id: String,
    /// Monday of the week the questionnaire was submitted for.
    pub week_start_date: NaiveDate,
    pub feeling_on_waking: WakeFeeling,
    pub sleep_restorative: Restorative,
    pub post_exertion_malaise: Malaise,
    pub too_tired_days_count: u8,
    pub concentration_difficulties: bool,
    pub risk_score: RiskScore,
}
