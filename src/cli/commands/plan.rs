use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::cycles::{
    compute_bedtime, compute_debt_adjustment, compute_ideal_cycles,
};
use crate::core::calculator::debt::total_debt;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::models::debt::DebtLevel;
use crate::storage;
use crate::ui::messages::{header, info, warning};
use crate::utils::date;
use crate::utils::formatting::{format_duration, format_time};
use crate::utils::time::parse_time;
use chrono::{Duration, Local, TimeZone};

/// Normal mode: plan tonight's bedtime for complete sleep cycles.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { wake, cycles } = cmd {
        let wake_t = parse_time(wake).ok_or_else(|| AppError::InvalidTime(wake.clone()))?;

        let store = SqliteKv::open(&cfg.database)?;
        let settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;
        let ss = settings.sleep_settings();
        let fmt = settings.time_format;

        // A wake time earlier than now means tomorrow morning.
        let now = Local::now();
        let mut wake_dt = Local
            .from_local_datetime(&date::today().and_time(wake_t))
            .single()
            .ok_or_else(|| AppError::InvalidTime(wake.clone()))?;
        if wake_dt <= now {
            wake_dt += Duration::days(1);
        }

        let target_cycles = cycles.unwrap_or_else(|| compute_ideal_cycles(&ss));
        let plan = compute_bedtime(wake_dt, target_cycles, &ss);
        let sleep_time = plan.bedtime + Duration::minutes(ss.fall_asleep_time);

        header("Bedtime plan");
        println!(
            "Go to bed at:   {} on {}  (asleep by {})",
            format_time(&plan.bedtime, fmt),
            plan.bedtime.format("%Y-%m-%d"),
            format_time(&sleep_time, fmt)
        );
        println!(
            "Wake up at:     {} on {}",
            format_time(&plan.wake_time, fmt),
            plan.wake_time.format("%Y-%m-%d")
        );
        println!(
            "Sleep:          {} = {} complete cycles",
            format_duration(plan.total_sleep_minutes as f64),
            plan.cycles
        );

        // Debt-adjusted variant, when debt is on the books.
        let records = storage::get_sleep_records(&store)?;
        let naps = storage::get_nap_records(&store)?;
        let debt = total_debt(&records, &naps, date::today(), cfg.debt_window_days);

        if let Some(adjusted) = compute_debt_adjustment(&plan, &ss, debt) {
            let level = DebtLevel::from_minutes(debt);
            println!();
            warning(format!(
                "You carry {} of sleep debt ({}).",
                format_duration(debt as f64),
                level.label()
            ));
            println!(
                "Debt-adjusted bedtime: {} ({} min earlier) -> about {} of sleep",
                format_time(&adjusted.bedtime, fmt),
                adjusted.recovery_buffer_minutes,
                format_duration(adjusted.total_sleep_minutes as f64)
            );
            info(format!(
                "At this pace the debt clears in about {} nights.",
                adjusted.estimated_recovery_nights
            ));
        }
    }

    Ok(())
}
