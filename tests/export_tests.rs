use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_profile, log_night, rsm, setup_test_db, temp_out};

#[test]
fn export_json_writes_records() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");

    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("total_sleep_minutes"));
    assert!(content.contains("465"));
}

#[test]
fn export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");

    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");
    log_night(&db_path, "23:30", "06:30");

    rsm()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].contains("debt_minutes"));
    assert_eq!(lines.len(), 3); // header + 2 nights
}

#[test]
fn export_xlsx_produces_a_file() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    rsm()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn export_rejects_relative_paths() {
    let db_path = setup_test_db("export_rel");
    init_with_profile(&db_path, 30);

    rsm()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            "relative.json",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_range_filters_records() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "json");

    init_with_profile(&db_path, 30);
    log_night(&db_path, "23:00", "07:00");

    // a range far in the past matches nothing
    rsm()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2001",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No sleep records matched"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert_eq!(content.trim(), "[]");
}

#[test]
fn backup_copies_the_database() {
    let db_path = setup_test_db("backup");
    let out = temp_out("backup", "sqlite");

    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn compressed_backup_produces_a_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");

    init_with_profile(&db_path, 30);

    rsm()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = out.replace(".sqlite", ".zip");
    assert!(fs::metadata(&zip_path).map(|m| m.len() > 0).unwrap_or(false));
}
