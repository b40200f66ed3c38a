use crate::db::kv::{KvStore, SqliteKv};
use crate::errors::AppResult;
use crate::storage;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &SqliteKv, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) STORED KEYS
    //
    let keys = store.keys()?;
    println!(
        "{}• Stored keys:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        keys.len(),
        RESET
    );

    //
    // 3) SLEEP RECORDS + DATE RANGE
    //
    let records = storage::get_sleep_records(store)?;
    println!(
        "{}• Sleep records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    let fmt_first = records
        .first()
        .map(|r| r.date.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .last()
        .map(|r| r.date.to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) NAPS AND QUESTIONNAIRES
    //
    let naps = storage::get_nap_records(store)?;
    let questionnaires = storage::get_questionnaires(store)?;
    println!("{}• Naps logged:{} {}", CYAN, RESET, naps.len());
    println!(
        "{}• Questionnaires:{} {}",
        CYAN,
        RESET,
        questionnaires.len()
    );

    //
    // 5) AUDIT LOG ROWS
    //
    let log_rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
