use chrono::{DateTime, Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fixed-duration nap types. Each carries a flat debt credit regardless
/// of the duration actually logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NapType {
    /// 20 minutes - quick refresh, no deep sleep.
    Power,
    /// 90 minutes - one complete sleep cycle.
    Cycle,
}

impl NapType {
    pub fn duration_minutes(&self) -> i64 {
        match self {
            NapType::Power => 20,
            NapType::Cycle => 90,
        }
    }

    /// Flat debt credit, not computed from the actual nap duration.
    pub fn debt_reduction(&self) -> i64 {
        match self {
            NapType::Power => 15,
            NapType::Cycle => 60,
        }
    }

    pub fn nt_as_str(&self) -> &'static str {
        match self {
            NapType::Power => "power",
            NapType::Cycle => "cycle",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NapRecord {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Local>,
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: NapType,
    pub debt_reduction: i64,
}

impl NapRecord {
    pub fn new(id: String, start_time: DateTime<Local>, kind: NapType) -> Self {
        Self {
            id,
            date: start_time.date_naive(),
            start_time,
            duration: kind.duration_minutes(),
            kind,
            debt_reduction: kind.debt_reduction(),
        }
    }
}
