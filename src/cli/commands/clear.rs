use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::{success, warning};
use std::io::{Write, stdin, stdout};

/// Wipe every stored key: records, naps, settings, questionnaires and
/// flags. The audit log table survives for traceability.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning(
                "This permanently deletes all sleep records, naps, settings and \
                 questionnaires. You will need to run `init` again.",
            );
            print!("Type 'yes' to continue: ");
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;

            if answer.trim().to_lowercase() != "yes" {
                warning("Clear cancelled.");
                return Ok(());
            }
        }

        let mut store = SqliteKv::open(&cfg.database)?;
        let removed = storage::clear_all(&mut store)?;

        crate::db::log::ttlog(
            store.conn(),
            "clear",
            "",
            &format!("All data cleared ({} keys removed)", removed),
        )?;

        success("All data cleared. Run `rsleepmanager init --age <AGE>` to start over.");
    }

    Ok(())
}
