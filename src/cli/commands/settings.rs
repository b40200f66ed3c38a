use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::cycles::recommended_ideal_sleep_hours;
use crate::core::insights::InsightsLogic;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::models::user_settings::TimeFormat;
use crate::storage;
use crate::ui::messages::{success, warning};

/// View or update the persisted sleep profile.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        age,
        cycle_duration,
        fall_asleep_time,
        ideal_sleep_hours,
        time_format,
        theme,
        apply_optimized,
    } = cmd
    {
        let mut store = SqliteKv::open(&cfg.database)?;

        let mut settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;

        let mut changed = false;

        if let Some(age) = age {
            settings.age = *age;
            // A new age re-derives the recommendation unless the user
            // pins the target explicitly in the same invocation.
            if ideal_sleep_hours.is_none() {
                settings.ideal_sleep_hours = recommended_ideal_sleep_hours(*age);
            }
            changed = true;
        }
        if let Some(cycle) = cycle_duration {
            settings.cycle_duration = *cycle;
            changed = true;
        }
        if let Some(fall) = fall_asleep_time {
            settings.fall_asleep_time = *fall;
            changed = true;
        }
        if let Some(ideal) = ideal_sleep_hours {
            settings.ideal_sleep_hours = *ideal;
            changed = true;
        }
        if let Some(fmt) = time_format {
            settings.time_format = *fmt;
            changed = true;
        }
        if let Some(theme) = theme {
            settings.theme_preference = *theme;
            changed = true;
        }

        if *apply_optimized {
            let records = storage::get_sleep_records(&store)?;
            match InsightsLogic::suggest_cycle_duration(&records) {
                Some(optimized) => {
                    settings.cycle_duration = optimized;
                    changed = true;
                    success(format!(
                        "Applied optimized cycle duration: {} minutes.",
                        optimized
                    ));
                }
                None => warning(
                    "No optimized cycle duration available yet. Rate at least 5 nights with \
                     `checkin --rating` first.",
                ),
            }
        }

        if changed {
            storage::save_user_settings(&mut store, &settings)?;
            // Re-read so the printout shows the clamped values.
            settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;
            success("Settings saved.");
        }

        println!();
        println!("Age:                {}", settings.age);
        println!("Cycle duration:     {} min", settings.cycle_duration);
        println!("Fall-asleep time:   {} min", settings.fall_asleep_time);
        println!("Ideal sleep:        {} h", settings.ideal_sleep_hours);
        println!(
            "Time format:        {}",
            match settings.time_format {
                TimeFormat::H12 => "12h",
                TimeFormat::H24 => "24h",
            }
        );
    }

    Ok(())
}
