use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let store = SqliteKv::open(&cfg.database)?;

        if *migrate {
            run_pending_migrations(store.conn())?;
            success("Migrations up to date.");
        }

        if *check {
            let result: String = store
                .conn()
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {}", result));
            }
        }

        if *vacuum {
            store.conn().execute_batch("VACUUM")?;
            success("Database optimized.");
        }

        if *show_info {
            print_db_info(&store, &cfg.database)?;
        }

        if !(*migrate || *check || *vacuum || *show_info) {
            info("Nothing to do. Try `db --info`, `db --check`, `db --migrate` or `db --vacuum`.");
        }
    }

    Ok(())
}
