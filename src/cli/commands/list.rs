use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::models::sleep_record::SleepRecord;
use crate::storage;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_debt, colorize_optional};
use crate::utils::date::{self, weekday_name};
use crate::utils::formatting::{format_duration, format_time};
use crate::utils::table::{Column, Table};

/// List logged nights with summary statistics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { days, details } = cmd {
        let store = SqliteKv::open(&cfg.database)?;
        let settings = storage::get_user_settings(&store)?.unwrap_or_default();
        let fmt = settings.time_format;

        let records = storage::get_recent_sleep_records(&store, date::today(), *days)?;

        if records.is_empty() {
            info(format!("No sleep records in the last {} days.", days));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "DATE".into(),
                width: 10,
            },
            Column {
                header: "BED".into(),
                width: 8,
            },
            Column {
                header: "WAKE".into(),
                width: 8,
            },
            Column {
                header: "SLEPT".into(),
                width: 7,
            },
            Column {
                header: "CYCLES".into(),
                width: 6,
            },
            Column {
                header: "DEBT".into(),
                width: 7,
            },
            Column {
                header: "RATING".into(),
                width: 6,
            },
            Column {
                header: "DC".into(),
                width: 2,
            },
        ]);

        for r in &records {
            table.add_row(vec![
                r.date.to_string(),
                format_time(&r.bedtime, fmt),
                format_time(&r.wake_time, fmt),
                format_duration(r.total_sleep_minutes as f64),
                r.cycles.to_string(),
                format!(
                    "{}{}{}",
                    color_for_debt(r.debt_minutes),
                    format_duration(r.debt_minutes as f64),
                    RESET
                ),
                colorize_optional(
                    &r.wake_quality_rating
                        .map(|q| format!("{}/5", q))
                        .unwrap_or_else(|| "-".into()),
                ),
                if r.is_damage_control { "!".into() } else { String::new() },
            ]);
        }

        println!("\n{}", table.render());

        if *details {
            for r in records.iter().filter(|r| r.notes.is_some()) {
                println!("{} [{}]: {}", r.date, r.id, r.notes.as_deref().unwrap_or(""));
            }
            println!();
        }

        print_stats(&records, *days);
    }

    Ok(())
}

fn print_stats(records: &[SleepRecord], days: i64) {
    let count = records.len() as f64;
    let total_debt: i64 = records.iter().map(|r| r.debt_minutes).sum();
    let average_debt = total_debt as f64 / count;
    let average_sleep =
        records.iter().map(|r| r.total_sleep_minutes).sum::<i64>() as f64 / count;

    println!("Nights tracked ({} days): {}", days, records.len());
    println!("Average sleep:  {}", format_duration(average_sleep));
    println!("Average debt:   {}", format_duration(average_debt));

    if let Some(worst) = records.iter().max_by_key(|r| r.debt_minutes)
        && worst.debt_minutes > 0
    {
        println!(
            "Worst night:    {} ({} short)",
            worst.date,
            format_duration(worst.debt_minutes as f64)
        );
    }

    // Weekday with the highest average debt (needs 2+ nights on that day).
    let mut by_day: std::collections::HashMap<&'static str, (i64, usize)> =
        std::collections::HashMap::new();
    for r in records {
        let entry = by_day.entry(weekday_name(r.date)).or_insert((0, 0));
        entry.0 += r.debt_minutes;
        entry.1 += 1;
    }

    let worst_weekday = by_day
        .into_iter()
        .filter(|(_, (_, c))| *c >= 2)
        .map(|(day, (total, c))| (day, total as f64 / c as f64))
        .filter(|(_, avg)| *avg > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((day, avg)) = worst_weekday {
        println!("Worst weekday:  {} (avg {})", day, format_duration(avg));
    }
}
