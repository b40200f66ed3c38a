use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::damage_control::compute_damage_control;
use crate::core::calculator::debt::total_debt;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages::{header, info, warning};
use crate::utils::date;
use crate::utils::formatting::{format_duration, format_time};
use crate::utils::time::parse_time;
use chrono::{Duration, Local, TimeZone};

/// Emergency guidance for a hard wake deadline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::DamageControl { wake } = cmd {
        let wake_t = parse_time(wake).ok_or_else(|| AppError::InvalidTime(wake.clone()))?;

        let store = SqliteKv::open(&cfg.database)?;
        let settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;
        let fmt = settings.time_format;

        let now = Local::now();
        let mut deadline = Local
            .from_local_datetime(&date::today().and_time(wake_t))
            .single()
            .ok_or_else(|| AppError::InvalidTime(wake.clone()))?;
        if deadline <= now {
            deadline += Duration::days(1);
        }

        // Existing debt makes a bad night worse; surface it up front.
        let records = storage::get_sleep_records(&store)?;
        let naps = storage::get_nap_records(&store)?;
        let existing_debt = total_debt(&records, &naps, date::today(), cfg.debt_window_days);
        if existing_debt > 0 {
            warning(format!(
                "You already have {} of debt over the last {} days. This situation will add more.",
                format_duration(existing_debt as f64),
                cfg.debt_window_days
            ));
        }

        let result = compute_damage_control(now, deadline, &settings.sleep_settings(), fmt);

        header("Damage control");
        println!("{}", result.recommendation);

        if let (Some(until), Some(total)) = (result.sleep_until, result.total_minutes) {
            println!();
            println!(
                "Sleep until:  {}  ({} of sleep, {} complete cycles)",
                format_time(&until, fmt),
                format_duration(total as f64),
                result.cycles
            );
        }

        if let Some(w) = &result.warning {
            warning(w);
        }

        if result.can_sleep {
            info("Log the night tomorrow with `log --damage-control` to keep the ledger honest.");
        }
    }

    Ok(())
}
