// src/export/model.rs

use crate::models::sleep_record::SleepRecord;
use serde::Serialize;

/// Flat per-night row for export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub date: String,
    pub bedtime: String,
    pub wake_time: String,
    pub total_sleep_minutes: i64,
    pub ideal_sleep_minutes: i64,
    pub debt_minutes: i64,
    pub cycles: i64,
    pub wake_quality: String,
    pub damage_control: String,
}

impl RecordExport {
    pub fn from_record(r: &SleepRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            bedtime: r.bedtime.format("%Y-%m-%d %H:%M").to_string(),
            wake_time: r.wake_time.format("%Y-%m-%d %H:%M").to_string(),
            total_sleep_minutes: r.total_sleep_minutes,
            ideal_sleep_minutes: r.ideal_sleep_minutes,
            debt_minutes: r.debt_minutes,
            cycles: r.cycles,
            wake_quality: r
                .wake_quality_rating
                .map(|q| q.to_string())
                .unwrap_or_default(),
            damage_control: if r.is_damage_control {
                "yes".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Header row for CSV / JSON / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "bedtime",
        "wake_time",
        "total_sleep_minutes",
        "ideal_sleep_minutes",
        "debt_minutes",
        "cycles",
        "wake_quality",
        "damage_control",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.date.clone(),
        r.bedtime.clone(),
        r.wake_time.clone(),
        r.total_sleep_minutes.to_string(),
        r.ideal_sleep_minutes.to_string(),
        r.debt_minutes.to_string(),
        r.cycles.to_string(),
        r.wake_quality.clone(),
        r.damage_control.clone(),
    ]
}
