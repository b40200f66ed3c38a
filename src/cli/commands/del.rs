use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages::success;

/// Delete a sleep record by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = SqliteKv::open(&cfg.database)?;

        if !storage::delete_sleep_record(&mut store, id)? {
            return Err(AppError::UnknownRecord(id.clone()));
        }

        crate::db::log::ttlog(store.conn(), "del", id, "Sleep record deleted")?;
        success(format!("Deleted sleep record {}.", id));
    }

    Ok(())
}
