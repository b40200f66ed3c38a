use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::cycles::recommended_ideal_sleep_hours;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::models::user_settings::UserSettings;
use crate::storage;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Initialize config, database and (when an age is given) the profile.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init {
        age,
        cycle_duration,
        fall_asleep_time,
    } = &cli.command
    {
        Config::init_all(cli.db.clone(), cli.test)?;

        let cfg = {
            let mut c = Config::load();
            if let Some(custom_db) = &cli.db {
                c.database = custom_db.clone();
            }
            c
        };

        let mut store = SqliteKv::open(&cfg.database)?;
        storage::set_app_start_date(&mut store, date::today())?;

        match age {
            Some(age) => {
                let settings = UserSettings {
                    age: *age,
                    cycle_duration: cycle_duration.unwrap_or(90),
                    fall_asleep_time: fall_asleep_time.unwrap_or(15),
                    ideal_sleep_hours: recommended_ideal_sleep_hours(*age),
                    ..UserSettings::default()
                };

                storage::save_user_settings(&mut store, &settings)?;
                storage::set_onboarding_complete(&mut store)?;

                crate::db::log::ttlog(
                    store.conn(),
                    "init",
                    &age.to_string(),
                    "Profile created during onboarding",
                )?;

                success(format!(
                    "Profile created. Recommended sleep: {} hours per night.",
                    settings.ideal_sleep_hours
                ));
            }
            None => {
                crate::db::log::ttlog(store.conn(), "init", "", "Database initialized")?;
                warning(
                    "No profile yet: run `rsleepmanager init --age <AGE>` or \
                     `rsleepmanager settings --age <AGE>` to finish onboarding.",
                );
            }
        }
    }

    Ok(())
}
