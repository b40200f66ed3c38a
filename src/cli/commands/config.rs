use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy();

        if *print_config {
            ConfigLogic::print(&path_str)?;
        } else if *edit_config {
            ConfigLogic::edit(&path_str, editor)?;
        } else {
            info(format!("Configuration file: {}", path_str));
        }
    }

    Ok(())
}
