use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = SqliteKv::open(&cfg.database)?;

        let path = expand_tilde(file);
        ExportLogic::export(
            &store,
            format.clone(),
            &path.to_string_lossy(),
            range,
            *force,
        )?;

        crate::db::log::ttlog(
            store.conn(),
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} export of {} records",
                format.as_str(),
                storage::get_sleep_records(&store)?.len()
            ),
        )?;
    }

    Ok(())
}
