use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit { print } = cmd {
        if *print {
            let mut pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;
            AuditLogic::print_log(&mut pool, cfg)?;
        } else {
            info("Use `audit --print` to show the internal log.");
        }
    }

    Ok(())
}
