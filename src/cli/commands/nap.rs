use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::nap::NapLogic;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_optional_time;
use chrono::Local;

/// Log a nap. Power naps are 20 minutes, cycle naps 90; each carries its
/// fixed debt credit regardless of what was actually slept.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Nap { kind, at } = cmd {
        let start = parse_optional_time(at.as_ref())?;

        let mut store = SqliteKv::open(&cfg.database)?;

        let nap = NapLogic::build_record(*kind, start, Local::now(), storage::new_id())?;
        storage::save_nap_record(&mut store, &nap)?;

        crate::db::log::ttlog(
            store.conn(),
            "nap",
            nap.kind.nt_as_str(),
            &format!("{} min nap, -{} min debt", nap.duration, nap.debt_reduction),
        )?;

        success(format!(
            "{} nap logged. Your debt decreased by ~{}.",
            match nap.kind {
                crate::models::nap_record::NapType::Power => "Power",
                crate::models::nap_record::NapType::Cycle => "Full cycle",
            },
            format_duration(nap.debt_reduction as f64)
        ));
    }

    Ok(())
}
