//! Typed repository over the key/value storage port. Each key holds one
//! JSON blob; settings are sanitized on every read and write so a corrupt
//! or hand-edited blob never reaches the calculator.

pub mod keys;

use crate::db::kv::KvStore;
use crate::errors::AppResult;
use crate::models::nap_record::NapRecord;
use crate::models::questionnaire::WeeklyQuestionnaire;
use crate::models::sleep_record::SleepRecord;
use crate::models::user_settings::UserSettings;
use chrono::{Duration, NaiveDate};

// ---------------------------
// Sleep records
// ---------------------------

pub fn get_sleep_records(store: &dyn KvStore) -> AppResult<Vec<SleepRecord>> {
    read_list(store, keys::SLEEP_RECORDS)
}

/// Records whose date falls in the trailing `days`-day window ending at
/// `today`, most recent first.
pub fn get_recent_sleep_records(
    store: &dyn KvStore,
    today: NaiveDate,
    days: i64,
) -> AppResult<Vec<SleepRecord>> {
    let cutoff = today - Duration::days(days);
    let mut records: Vec<SleepRecord> = get_sleep_records(store)?
        .into_iter()
        .filter(|r| r.date >= cutoff && r.date <= today)
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

/// Insert or replace by id (a check-in re-saves the same record with its
/// rating attached).
pub fn save_sleep_record(store: &mut dyn KvStore, record: &SleepRecord) -> AppResult<()> {
    let mut records = get_sleep_records(store)?;
    records.retain(|r| r.id != record.id);
    records.push(record.clone());
    records.sort_by(|a, b| a.date.cmp(&b.date));
    write_list(store, keys::SLEEP_RECORDS, &records)
}

/// Returns false when no record carried that id.
pub fn delete_sleep_record(store: &mut dyn KvStore, id: &str) -> AppResult<bool> {
    let mut records = get_sleep_records(store)?;
    let before = records.len();
    records.retain(|r| r.id != id);
    if records.len() == before {
        return Ok(false);
    }
    write_list(store, keys::SLEEP_RECORDS, &records)?;
    Ok(true)
}

pub fn has_logged_sleep(store: &dyn KvStore) -> AppResult<bool> {
    Ok(!get_sleep_records(store)?.is_empty())
}

// ---------------------------
// Nap records
// ---------------------------

pub fn get_nap_records(store: &dyn KvStore) -> AppResult<Vec<NapRecord>> {
    read_list(store, keys::NAP_RECORDS)
}

pub fn save_nap_record(store: &mut dyn KvStore, nap: &NapRecord) -> AppResult<()> {
    let mut naps = get_nap_records(store)?;
    naps.push(nap.clone());
    write_list(store, keys::NAP_RECORDS, &naps)
}

// ---------------------------
// User settings
// ---------------------------

/// `None` only when nothing was ever stored. A blob that fails to parse
/// degrades to the defaults; parsed values are clamped to their bounds.
pub fn get_user_settings(store: &dyn KvStore) -> AppResult<Option<UserSettings>> {
    let Some(raw) = store.get(keys::USER_SETTINGS)? else {
        return Ok(None);
    };

    let settings = serde_json::from_str::<UserSettings>(&raw).unwrap_or_default();
    Ok(Some(settings.sanitized()))
}

pub fn save_user_settings(store: &mut dyn KvStore, settings: &UserSettings) -> AppResult<()> {
    let sanitized = settings.clone().sanitized();
    store.set(keys::USER_SETTINGS, &serde_json::to_string(&sanitized)?)
}

// ---------------------------
// Questionnaires
// ---------------------------

pub fn get_questionnaires(store: &dyn KvStore) -> AppResult<Vec<WeeklyQuestionnaire>> {
    read_list(store, keys::QUESTIONNAIRES)
}

pub fn save_questionnaire(store: &mut dyn KvStore, q: &WeeklyQuestionnaire) -> AppResult<()> {
    let mut all = get_questionnaires(store)?;
    all.push(q.clone());
    write_list(store, keys::QUESTIONNAIRES, &all)
}

// ---------------------------
// App flags
// ---------------------------

pub fn is_onboarding_complete(store: &dyn KvStore) -> AppResult<bool> {
    Ok(store.get(keys::ONBOARDING_COMPLETE)?.as_deref() == Some("true"))
}

pub fn set_onboarding_complete(store: &mut dyn KvStore) -> AppResult<()> {
    store.set(keys::ONBOARDING_COMPLETE, "true")
}

/// Recorded once, on first init.
pub fn set_app_start_date(store: &mut dyn KvStore, today: NaiveDate) -> AppResult<()> {
    if store.get(keys::APP_START_DATE)?.is_none() {
        store.set(keys::APP_START_DATE, &today.to_string())?;
    }
    Ok(())
}

pub fn get_first_sleep_log_date(store: &dyn KvStore) -> AppResult<Option<NaiveDate>> {
    Ok(store
        .get(keys::FIRST_SLEEP_LOG_DATE)?
        .and_then(|s| crate::utils::date::parse_date(&s)))
}

/// Recorded once, on the first logged night.
pub fn set_first_sleep_log_date(store: &mut dyn KvStore, date: NaiveDate) -> AppResult<()> {
    if store.get(keys::FIRST_SLEEP_LOG_DATE)?.is_none() {
        store.set(keys::FIRST_SLEEP_LOG_DATE, &date.to_string())?;
    }
    Ok(())
}

/// The full data-clear: the only bulk deletion in the application.
pub fn clear_all(store: &mut dyn KvStore) -> AppResult<usize> {
    let keys = store.keys()?;
    let count = keys.len();
    for key in keys {
        store.remove(&key)?;
    }
    Ok(count)
}

/// Opaque record id: millisecond timestamp, like the rest of the data a
/// plain string on the wire.
pub fn new_id() -> String {
    chrono::Local::now().timestamp_millis().to_string()
}

// ---------------------------
// JSON list plumbing
// ---------------------------

fn read_list<T: serde::de::DeserializeOwned>(store: &dyn KvStore, key: &str) -> AppResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

fn write_list<T: serde::Serialize>(
    store: &mut dyn KvStore,
    key: &str,
    list: &[T],
) -> AppResult<()> {
    store.set(key, &serde_json::to_string(list)?)
}
