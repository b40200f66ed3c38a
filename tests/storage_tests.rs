use chrono::{Duration, Local, NaiveDate, TimeZone};
use rsleepmanager::db::kv::{KvStore, MemoryKv};
use rsleepmanager::models::sleep_record::SleepRecord;
use rsleepmanager::models::user_settings::{ThemePreference, TimeFormat, UserSettings};
use rsleepmanager::storage;

fn record(id: &str, date: NaiveDate) -> SleepRecord {
    let bedtime = Local
        .from_local_datetime(&date.and_hms_opt(23, 0, 0).unwrap())
        .unwrap();
    let estimated_sleep_time = bedtime + Duration::minutes(15);

    SleepRecord {
        id: id.to_string(),
        date,
        bedtime,
        estimated_sleep_time,
        wake_time: estimated_sleep_time + Duration::minutes(420),
        total_sleep_minutes: 420,
        ideal_sleep_minutes: 480,
        debt_minutes: 60,
        cycles: 4,
        wake_quality_rating: None,
        is_damage_control: false,
        notes: None,
    }
}

#[test]
fn sleep_records_round_trip() {
    let mut store = MemoryKv::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    storage::save_sleep_record(&mut store, &record("a", date)).unwrap();
    storage::save_sleep_record(&mut store, &record("b", date + Duration::days(1))).unwrap();

    let loaded = storage::get_sleep_records(&store).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "a");
    assert_eq!(loaded[0].wake_time, record("a", date).wake_time);
}

#[test]
fn saving_the_same_id_replaces_the_record() {
    let mut store = MemoryKv::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    storage::save_sleep_record(&mut store, &record("a", date)).unwrap();

    // the morning check-in path: same id, rating attached
    let mut rated = record("a", date);
    rated.wake_quality_rating = Some(4);
    storage::save_sleep_record(&mut store, &rated).unwrap();

    let loaded = storage::get_sleep_records(&store).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].wake_quality_rating, Some(4));
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let mut store = MemoryKv::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    storage::save_sleep_record(&mut store, &record("a", date)).unwrap();

    assert!(storage::delete_sleep_record(&mut store, "a").unwrap());
    assert!(!storage::delete_sleep_record(&mut store, "a").unwrap());
    assert!(storage::get_sleep_records(&store).unwrap().is_empty());
}

#[test]
fn recent_records_filter_and_sort() {
    let mut store = MemoryKv::new();
    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

    storage::save_sleep_record(&mut store, &record("old", today - Duration::days(40))).unwrap();
    storage::save_sleep_record(&mut store, &record("mid", today - Duration::days(5))).unwrap();
    storage::save_sleep_record(&mut store, &record("new", today)).unwrap();

    let recent = storage::get_recent_sleep_records(&store, today, 30).unwrap();
    assert_eq!(recent.len(), 2);
    // most recent first
    assert_eq!(recent[0].id, "new");
    assert_eq!(recent[1].id, "mid");
}

#[test]
fn settings_are_clamped_on_save_and_load() {
    let mut store = MemoryKv::new();

    let wild = UserSettings {
        age: 300,
        cycle_duration: 45,
        fall_asleep_time: 600,
        ideal_sleep_hours: 2.0,
        ..UserSettings::default()
    };
    storage::save_user_settings(&mut store, &wild).unwrap();

    let loaded = storage::get_user_settings(&store).unwrap().unwrap();
    assert_eq!(loaded.age, 120);
    assert_eq!(loaded.cycle_duration, 60);
    assert_eq!(loaded.fall_asleep_time, 120);
    assert_eq!(loaded.ideal_sleep_hours, 4.0);
}

#[test]
fn hand_edited_settings_blob_is_sanitized_not_fatal() {
    let mut store = MemoryKv::new();

    // out-of-range numbers, unknown enum member, missing fields
    store
        .set(
            storage::keys::USER_SETTINGS,
            r#"{"age": 30, "cycleDuration": 500, "timeFormat": "13h", "themePreference": "dark"}"#,
        )
        .unwrap();

    let loaded = storage::get_user_settings(&store).unwrap().unwrap();
    assert_eq!(loaded.cycle_duration, 120);
    assert_eq!(loaded.time_format, TimeFormat::H12); // coerced to default
    assert_eq!(loaded.theme_preference, ThemePreference::Dark);
    assert_eq!(loaded.fall_asleep_time, 15); // missing -> default
}

#[test]
fn corrupt_settings_blob_degrades_to_defaults() {
    let mut store = MemoryKv::new();
    store
        .set(storage::keys::USER_SETTINGS, "not json at all {{{")
        .unwrap();

    let loaded = storage::get_user_settings(&store).unwrap().unwrap();
    assert_eq!(loaded.cycle_duration, 90);
    assert_eq!(loaded.ideal_sleep_hours, 8.0);
}

#[test]
fn missing_settings_are_none() {
    let store = MemoryKv::new();
    assert!(storage::get_user_settings(&store).unwrap().is_none());
}

#[test]
fn clear_all_wipes_every_key() {
    let mut store = MemoryKv::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    storage::save_sleep_record(&mut store, &record("a", date)).unwrap();
    storage::save_user_settings(&mut store, &UserSettings::default()).unwrap();
    storage::set_onboarding_complete(&mut store).unwrap();

    let removed = storage::clear_all(&mut store).unwrap();
    assert_eq!(removed, 3);
    assert!(store.keys().unwrap().is_empty());
    assert!(!storage::is_onboarding_complete(&store).unwrap());
}

#[test]
fn first_sleep_log_date_is_write_once() {
    let mut store = MemoryKv::new();
    let first = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let later = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

    storage::set_first_sleep_log_date(&mut store, first).unwrap();
    storage::set_first_sleep_log_date(&mut store, later).unwrap();

    assert_eq!(storage::get_first_sleep_log_date(&store).unwrap(), Some(first));
}
