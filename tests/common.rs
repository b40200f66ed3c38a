#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsm() -> Command {
    cargo_bin_cmd!("rsleepmanager")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsleepmanager.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB with a full profile (onboarding)
pub fn init_with_profile(db_path: &str, age: u32) {
    rsm()
        .args([
            "--db",
            db_path,
            "--test",
            "init",
            "--age",
            &age.to_string(),
        ])
        .assert()
        .success();
}

/// Log one night via the CLI (wake date defaults to today)
pub fn log_night(db_path: &str, bed: &str, wake: &str) {
    rsm()
        .args(["--db", db_path, "log", "--bed", bed, "--wake", wake])
        .assert()
        .success();
}
