use predicates::str::contains;

mod common;
use common::{init_with_profile, log_night, rsm, setup_test_db};

#[test]
fn init_with_age_creates_a_profile() {
    let db_path = setup_test_db("init_profile");

    rsm()
        .args(["--db", &db_path, "--test", "init", "--age", "30"])
        .assert()
        .success()
        .stdout(contains("Recommended sleep: 8 hours"));
}

#[test]
fn init_without_age_asks_for_onboarding() {
    let db_path = setup_test_db("init_bare");

    rsm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("No profile yet"));
}

#[test]
fn logging_requires_a_profile() {
    let db_path = setup_test_db("log_no_profile");

    rsm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsm()
        .args(["--db", &db_path, "log", "--bed", "23:00", "--wake", "07:00"])
        .assert()
        .failure()
        .stderr(contains("Not onboarded"));
}

#[test]
fn log_a_full_night() {
    let db_path = setup_test_db("log_full_night");
    init_with_profile(&db_path, 30);

    // 8h in bed minus 15 min to fall asleep = 465 min asleep
    rsm()
        .args(["--db", &db_path, "log", "--bed", "23:00", "--wake", "07:00"])
        .assert()
        .success()
        .stdout(contains("Sleep logged: 7h 45m"))
        .stdout(contains("5 complete cycles"))
        .stdout(contains("debt increased by 15m"));
}

#[test]
fn log_meeting_the_goal() {
    let db_path = setup_test_db("log_goal_met");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "log", "--bed", "22:30", "--wake", "07:00"])
        .assert()
        .success()
        .stdout(contains("You met your sleep goal"));
}

#[test]
fn short_night_then_nap_reduces_debt() {
    let db_path = setup_test_db("debt_flow");
    init_with_profile(&db_path, 30);

    // 315 min in bed -> 300 asleep -> 180 debt against the 8h ideal
    log_night(&db_path, "00:00", "05:15");

    rsm()
        .args(["--db", &db_path, "debt"])
        .assert()
        .success()
        .stdout(contains("3h"))
        .stdout(contains("Caution"));

    rsm()
        .args(["--db", &db_path, "nap", "cycle"])
        .assert()
        .success()
        .stdout(contains("decreased by ~1h"));

    // 180 - 60 = 120 minutes left
    rsm()
        .args(["--db", &db_path, "debt"])
        .assert()
        .success()
        .stdout(contains("2h"));
}

#[test]
fn list_shows_logged_nights_and_stats() {
    let db_path = setup_test_db("list_nights");
    init_with_profile(&db_path, 30);

    log_night(&db_path, "23:00", "07:00");
    log_night(&db_path, "23:30", "06:30");

    rsm()
        .args(["--db", &db_path, "list", "--days", "7"])
        .assert()
        .success()
        .stdout(contains("DATE"))
        .stdout(contains("Average sleep"))
        .stdout(contains("Average debt"));
}

#[test]
fn checkin_rates_todays_wake() {
    let db_path = setup_test_db("checkin");
    init_with_profile(&db_path, 30);

    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args(["--db", &db_path, "checkin", "--rating", "4"])
        .assert()
        .success()
        .stdout(contains("Good (4/5)"));
}

#[test]
fn checkin_without_a_record_fails_cleanly() {
    let db_path = setup_test_db("checkin_empty");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "checkin", "--rating", "4"])
        .assert()
        .failure()
        .stderr(contains("No sleep record found"));
}

#[test]
fn deleting_an_unknown_record_fails() {
    let db_path = setup_test_db("del_unknown");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "del", "doesnotexist"])
        .assert()
        .failure()
        .stderr(contains("No sleep record with id"));
}

#[test]
fn settings_are_clamped_at_the_boundary() {
    let db_path = setup_test_db("settings_clamp");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "settings", "--cycle", "300"])
        .assert()
        .success()
        .stdout(contains("120 min"));
}

#[test]
fn settings_age_rederives_ideal_sleep() {
    let db_path = setup_test_db("settings_age");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "settings", "--age", "70"])
        .assert()
        .success()
        .stdout(contains("7.5 h"));
}

#[test]
fn plan_names_bedtime_and_cycles() {
    let db_path = setup_test_db("plan");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "plan", "--wake", "07:00", "--cycles", "5"])
        .assert()
        .success()
        .stdout(contains("Bedtime plan"))
        .stdout(contains("5 complete cycles"))
        .stdout(contains("7h 30m"));
}

#[test]
fn damage_control_command_answers() {
    let db_path = setup_test_db("damage_control");
    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "damage-control", "--wake", "07:00"])
        .assert()
        .success()
        .stdout(contains("Damage control"));
}

#[test]
fn questionnaire_scores_and_saves() {
    let db_path = setup_test_db("questionnaire");
    init_with_profile(&db_path, 30);

    rsm()
        .args([
            "--db",
            &db_path,
            "questionnaire",
            "--waking",
            "exhausted",
            "--restorative",
            "no",
            "--malaise",
            "always",
            "--tired-days",
            "6",
            "--concentration",
        ])
        .assert()
        .success()
        .stdout(contains("Risk score: high"));
}

#[test]
fn clear_wipes_the_store() {
    let db_path = setup_test_db("clear");
    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data cleared"));

    rsm()
        .args(["--db", &db_path, "log", "--bed", "23:00", "--wake", "07:00"])
        .assert()
        .failure()
        .stderr(contains("Not onboarded"));
}

#[test]
fn audit_log_records_operations() {
    let db_path = setup_test_db("audit");
    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args(["--db", &db_path, "audit", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("log"));
}

#[test]
fn db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Sleep records"))
        .stdout(contains("1"));

    rsm()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}
