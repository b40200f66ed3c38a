use chrono::{Duration, Local, NaiveDate, TimeZone};
use rsleepmanager::core::insights::InsightsLogic;
use rsleepmanager::models::sleep_record::SleepRecord;

fn rated_night(
    date: NaiveDate,
    total_sleep_minutes: i64,
    cycles: i64,
    rating: Option<u8>,
) -> SleepRecord {
    let bedtime = Local
        .from_local_datetime(&date.and_hms_opt(23, 0, 0).unwrap())
        .unwrap();
    let estimated_sleep_time = bedtime + Duration::minutes(15);

    SleepRecord {
        id: format!("{}-{}", date, total_sleep_minutes),
        date,
        bedtime,
        estimated_sleep_time,
        wake_time: estimated_sleep_time + Duration::minutes(total_sleep_minutes),
        total_sleep_minutes,
        ideal_sleep_minutes: 480,
        debt_minutes: (480 - total_sleep_minutes).max(0),
        cycles,
        wake_quality_rating: rating,
        is_damage_control: false,
        notes: None,
    }
}

fn day(i: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + Duration::days(i)
}

#[test]
fn fewer_than_five_rated_nights_is_no_suggestion() {
    let records: Vec<_> = (0..4)
        .map(|i| rated_night(day(i), 400, 4, Some(5)))
        .collect();

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), None);
}

#[test]
fn consistent_observed_duration_is_suggested() {
    // five rated nights, all slept in 100-minute cycles (400 / 4)
    let records: Vec<_> = (0..5)
        .map(|i| rated_night(day(i), 400, 4, Some(4)))
        .collect();

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), Some(100));
}

#[test]
fn stock_ninety_minutes_is_never_suggested() {
    // observed duration comes out at exactly 90: nothing to change
    let records: Vec<_> = (0..5)
        .map(|i| rated_night(day(i), 450, 5, Some(4)))
        .collect();

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), None);
}

#[test]
fn small_buckets_are_not_trusted() {
    // five rated nights but split 2/2/1 across observed durations:
    // no bucket reaches the three-night threshold
    let records = vec![
        rated_night(day(0), 400, 4, Some(5)),
        rated_night(day(1), 400, 4, Some(5)),
        rated_night(day(2), 420, 4, Some(3)),
        rated_night(day(3), 420, 4, Some(3)),
        rated_night(day(4), 480, 4, Some(2)),
    ];

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), None);
}

#[test]
fn best_rated_bucket_wins() {
    // 100-minute bucket rated better than the 95-minute bucket
    let mut records: Vec<_> = (0..3)
        .map(|i| rated_night(day(i), 400, 4, Some(5)))
        .collect();
    records.extend((3..6).map(|i| rated_night(day(i), 380, 4, Some(2))));

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), Some(100));
}

#[test]
fn nights_without_complete_cycles_are_skipped() {
    // zero-cycle nights cannot produce an observed duration
    let mut records: Vec<_> = (0..5)
        .map(|i| rated_night(day(i), 10, 0, Some(5)))
        .collect();

    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), None);

    records.extend((5..10).map(|i| rated_night(day(i), 400, 4, Some(4))));
    assert_eq!(InsightsLogic::suggest_cycle_duration(&records), Some(100));
}

#[test]
fn insights_need_a_weeks_worth_of_data() {
    let records: Vec<_> = (0..6)
        .map(|i| rated_night(day(i), 300, 3, Some(2)))
        .collect();

    assert!(InsightsLogic::build_insights(&records, 90).is_empty());
}

#[test]
fn damage_control_overuse_is_reported() {
    let mut records: Vec<_> = (0..7)
        .map(|i| rated_night(day(i), 480, 5, None))
        .collect();
    for r in records.iter_mut().take(3) {
        r.is_damage_control = true;
    }

    let insights = InsightsLogic::build_insights(&records, 90);
    assert!(
        insights
            .iter()
            .any(|i| i.contains("Damage Control 3 times"))
    );
}

#[test]
fn best_cycle_count_insight_uses_the_configured_cycle_length() {
    // seven nights, five rated; the 5-cycle nights rate best
    let mut records = vec![
        rated_night(day(0), 450, 5, Some(5)),
        rated_night(day(1), 450, 5, Some(5)),
        rated_night(day(2), 360, 4, Some(2)),
        rated_night(day(3), 360, 4, Some(2)),
        rated_night(day(4), 450, 5, Some(4)),
    ];
    records.push(rated_night(day(5), 450, 5, None));
    records.push(rated_night(day(6), 450, 5, None));

    let insights = InsightsLogic::build_insights(&records, 90);
    assert!(
        insights
            .iter()
            .any(|i| i.contains("5 cycles (7.5 hours)"))
    );
}
