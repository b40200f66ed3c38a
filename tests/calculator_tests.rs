use chrono::{Duration, Local, NaiveTime, TimeZone};
use rsleepmanager::core::calculator::cycles::{
    compute_bedtime, compute_ideal_cycles, compute_night_debt, recommended_ideal_sleep_hours,
};
use rsleepmanager::models::debt::DebtLevel;
use rsleepmanager::models::user_settings::{SleepSettings, TimeFormat};
use rsleepmanager::utils::formatting::{format_clock, format_duration};

fn default_settings() -> SleepSettings {
    SleepSettings::default()
}

#[test]
fn bedtime_round_trips_to_wake_time() {
    let settings = default_settings();
    let wake = Local.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap();

    for cycles in 1..=8 {
        let plan = compute_bedtime(wake, cycles, &settings);
        let reconstructed = plan.bedtime
            + Duration::minutes(cycles * settings.cycle_duration + settings.fall_asleep_time);
        assert_eq!(reconstructed, wake, "round trip failed for {} cycles", cycles);
    }
}

#[test]
fn bedtime_five_cycles_default_settings() {
    let settings = default_settings();
    let wake = Local.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap();

    let plan = compute_bedtime(wake, 5, &settings);

    // 5 * 90 + 15 = 465 minutes before 07:00 -> 23:15 the previous day
    assert_eq!(plan.total_sleep_minutes, 450);
    assert_eq!(plan.cycles, 5);
    assert_eq!(
        plan.bedtime,
        Local.with_ymd_and_hms(2025, 3, 9, 23, 15, 0).unwrap()
    );
}

#[test]
fn ideal_cycles_rounds_to_nearest() {
    // 8h / 90min = 5.33 -> 5
    assert_eq!(compute_ideal_cycles(&default_settings()), 5);

    // 8h / 60min = 8
    let short = SleepSettings {
        cycle_duration: 60,
        ..default_settings()
    };
    assert_eq!(compute_ideal_cycles(&short), 8);

    // 7.5h / 100min = 4.5 -> rounds half up to 5
    let odd = SleepSettings {
        cycle_duration: 100,
        ideal_sleep_hours: 7.5,
        ..default_settings()
    };
    assert_eq!(compute_ideal_cycles(&odd), 5);
}

#[test]
fn night_debt_is_never_negative() {
    assert_eq!(compute_night_debt(300, 480), 180);
    assert_eq!(compute_night_debt(480, 480), 0);
    // oversleeping yields zero debt, not a credit
    assert_eq!(compute_night_debt(480 + 90, 480), 0);
    assert_eq!(compute_night_debt(0, 480), 480);
}

#[test]
fn recommended_hours_age_bands() {
    assert_eq!(recommended_ideal_sleep_hours(17), 9.0);
    assert_eq!(recommended_ideal_sleep_hours(18), 8.5);
    assert_eq!(recommended_ideal_sleep_hours(25), 8.5);
    assert_eq!(recommended_ideal_sleep_hours(26), 8.0);
    assert_eq!(recommended_ideal_sleep_hours(64), 8.0);
    assert_eq!(recommended_ideal_sleep_hours(65), 7.5);
}

#[test]
fn debt_level_boundaries() {
    // 6.98h is still caution, exactly 7h tips into moderate
    assert_eq!(DebtLevel::from_minutes(419), DebtLevel::Caution);
    assert_eq!(DebtLevel::from_minutes(420), DebtLevel::Moderate);

    assert_eq!(DebtLevel::from_minutes(0), DebtLevel::Good);
    assert_eq!(DebtLevel::from_minutes(119), DebtLevel::Good);
    assert_eq!(DebtLevel::from_minutes(120), DebtLevel::Caution);
    assert_eq!(DebtLevel::from_minutes(839), DebtLevel::Moderate);
    assert_eq!(DebtLevel::from_minutes(840), DebtLevel::Critical);
    assert_eq!(DebtLevel::from_minutes(10_000), DebtLevel::Critical);
}

#[test]
fn debt_level_is_total_over_nonnegative_minutes() {
    // every minute count lands in exactly one tier
    for minutes in 0..=2000 {
        let level = DebtLevel::from_minutes(minutes);
        let expected = match minutes {
            m if m < 120 => DebtLevel::Good,
            m if m < 420 => DebtLevel::Caution,
            m if m < 840 => DebtLevel::Moderate,
            _ => DebtLevel::Critical,
        };
        assert_eq!(level, expected, "minute {}", minutes);
    }
}

#[test]
fn duration_formatting() {
    assert_eq!(format_duration(0.0), "0m");
    assert_eq!(format_duration(45.0), "45m");
    assert_eq!(format_duration(60.0), "1h");
    assert_eq!(format_duration(480.0), "8h");
    assert_eq!(format_duration(450.0), "7h 30m");
    assert_eq!(format_duration(121.0), "2h 1m");
    // averages arrive as fractional minutes
    assert_eq!(format_duration(90.4), "1h 30m");
}

#[test]
fn clock_formatting_is_explicit() {
    let evening = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
    let morning = NaiveTime::from_hms_opt(6, 5, 0).unwrap();

    assert_eq!(format_clock(evening, TimeFormat::H24), "23:30");
    assert_eq!(format_clock(evening, TimeFormat::H12), "11:30 PM");
    assert_eq!(format_clock(morning, TimeFormat::H24), "06:05");
    // no leading zero on the hour in 12h mode
    assert_eq!(format_clock(morning, TimeFormat::H12), "6:05 AM");
}
