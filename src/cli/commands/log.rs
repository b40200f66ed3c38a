use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::{LogLogic, NightInput};
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_time;

/// Log a night of sleep.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        date: date_arg,
        bedtime,
        wake,
        fall_asleep,
        rating,
        notes,
        damage_control,
    } = cmd
    {
        //
        // 1. Parse wake date (default today)
        //
        let wake_date = match date_arg {
            Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::today(),
        };

        //
        // 2. Parse times (mandatory)
        //
        let bed = parse_time(bedtime).ok_or_else(|| AppError::InvalidTime(bedtime.clone()))?;
        let wake_t = parse_time(wake).ok_or_else(|| AppError::InvalidTime(wake.clone()))?;

        //
        // 3. Open store, require a profile
        //
        let mut store = SqliteKv::open(&cfg.database)?;
        let settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;

        //
        // 4. Build and persist the record
        //
        let input = NightInput {
            wake_date,
            bedtime: bed,
            wake_time: wake_t,
            fall_asleep_override: *fall_asleep,
            rating: *rating,
            notes: notes.clone(),
            is_damage_control: *damage_control,
        };

        let record = LogLogic::build_record(&input, &settings, storage::new_id())?;

        storage::save_sleep_record(&mut store, &record)?;
        storage::set_first_sleep_log_date(&mut store, record.date)?;

        crate::db::log::ttlog(
            store.conn(),
            "log",
            &record.date.to_string(),
            &format!("Slept {} min, {} cycles", record.total_sleep_minutes, record.cycles),
        )?;

        //
        // 5. Report
        //
        let extra_minutes = record.total_sleep_minutes % settings.cycle_duration;
        let cycle_text = if record.cycles == 1 { "cycle" } else { "cycles" };
        let extra_text = if extra_minutes > 0 {
            format!(" + {} minutes", extra_minutes)
        } else {
            String::new()
        };

        success(format!(
            "Sleep logged: {} ({} complete {}{})",
            format_duration(record.total_sleep_minutes as f64),
            record.cycles,
            cycle_text,
            extra_text
        ));

        if record.debt_minutes > 0 {
            info(format!(
                "Your debt increased by {}.",
                format_duration(record.debt_minutes as f64)
            ));
        } else {
            success("Great! You met your sleep goal.");
        }
    }

    Ok(())
}
