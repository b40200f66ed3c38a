//! Every key the application stores, in one place.

pub const SLEEP_RECORDS: &str = "sleepRecords";
pub const NAP_RECORDS: &str = "napRecords";
pub const USER_SETTINGS: &str = "userSettings";
pub const QUESTIONNAIRES: &str = "questionnaires";
pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
pub const FIRST_SLEEP_LOG_DATE: &str = "firstSleepLogDate";
pub const APP_START_DATE: &str = "appStartDate";
