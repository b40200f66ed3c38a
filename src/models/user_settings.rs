use clap::ValueEnum;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Clock display preference. Formatting functions take this explicitly;
/// resolving the user's preference is always the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    #[value(name = "12h")]
    H12,
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    H24,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::H12
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Light
    }
}

/// Persisted singleton with the user's profile and display preferences.
/// Stored as a JSON blob under the `userSettings` key and sanitized on
/// every read and write: numeric fields clamped, enums coerced to a valid
/// member, missing fields replaced by defaults. A hand-edited or corrupt
/// blob must never crash the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub age: u32,
    pub cycle_duration: i64,
    pub fall_asleep_time: i64,
    pub ideal_sleep_hours: f64,
    #[serde(deserialize_with = "lenient_time_format")]
    pub time_format: TimeFormat,
    #[serde(deserialize_with = "lenient_theme")]
    pub theme_preference: ThemePreference,
    pub notifications_enabled: bool,
    pub bedtime_reminder_minutes: i64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            age: 30,
            cycle_duration: 90,
            fall_asleep_time: 15,
            ideal_sleep_hours: 8.0,
            time_format: TimeFormat::default(),
            theme_preference: ThemePreference::default(),
            notifications_enabled: false,
            bedtime_reminder_minutes: 30,
        }
    }
}

impl UserSettings {
    /// Clamp every numeric field to its documented bounds.
    /// Applied at the storage boundary on both read and write.
    pub fn sanitized(mut self) -> Self {
        self.age = self.age.clamp(1, 120);
        self.cycle_duration = self.cycle_duration.clamp(60, 120);
        self.fall_asleep_time = self.fall_asleep_time.clamp(0, 120);
        self.ideal_sleep_hours = if self.ideal_sleep_hours.is_finite() {
            self.ideal_sleep_hours.clamp(4.0, 12.0)
        } else {
            8.0
        };
        self.bedtime_reminder_minutes = self.bedtime_reminder_minutes.clamp(0, 180);
        self
    }

    pub fn sleep_settings(&self) -> SleepSettings {
        SleepSettings {
            cycle_duration: self.cycle_duration,
            fall_asleep_time: self.fall_asleep_time,
            ideal_sleep_hours: self.ideal_sleep_hours,
        }
    }

    pub fn ideal_sleep_minutes(&self) -> i64 {
        (self.ideal_sleep_hours * 60.0).round() as i64
    }
}

/// Ephemeral subset passed into every calculation. The calculator never
/// reads ambient state; callers hand it this value explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepSettings {
    pub cycle_duration: i64,
    pub fall_asleep_time: i64,
    pub ideal_sleep_hours: f64,
}

impl Default for SleepSettings {
    fn default() -> Self {
        Self {
            cycle_duration: 90,
            fall_asleep_time: 15,
            ideal_sleep_hours: 8.0,
        }
    }
}

impl SleepSettings {
    pub fn ideal_sleep_minutes(&self) -> i64 {
        (self.ideal_sleep_hours * 60.0).round() as i64
    }
}

// Enum coercion: any unrecognized or non-string value falls back to the
// default instead of failing the whole settings blob.
fn lenient_time_format<'de, D>(deserializer: D) -> Result<TimeFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        Some("24h") => TimeFormat::H24,
        _ => TimeFormat::H12,
    })
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<ThemePreference, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        Some("dark") => ThemePreference::Dark,
        _ => ThemePreference::Light,
    })
}
