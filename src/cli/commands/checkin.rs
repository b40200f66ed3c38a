use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;
use crate::utils::date;

/// Morning check-in: rate the night woken up from today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { rating, notes } = cmd {
        let mut store = SqliteKv::open(&cfg.database)?;

        let records = storage::get_sleep_records(&store)?;
        let updated = CheckinLogic::apply(&records, date::today(), *rating, notes.clone())?;

        storage::save_sleep_record(&mut store, &updated)?;

        crate::db::log::ttlog(
            store.conn(),
            "checkin",
            &updated.date.to_string(),
            &format!("Wake quality rated {}", rating),
        )?;

        success(format!(
            "Check-in saved: {} ({}/5)",
            CheckinLogic::rating_label(*rating),
            rating
        ));
    }

    Ok(())
}
