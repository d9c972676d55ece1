use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK DATA FILES ----
        if *check {
            let mut missing = 0;
            for (city, path) in cfg.catalog().entries() {
                if path.is_file() {
                    let line = format!("{:<14} {}", city.as_str(), path.display());
                    success(line, cfg.color);
                } else {
                    missing += 1;
                    let line = format!("{:<14} {} (not found)", city.as_str(), path.display());
                    error(line, cfg.color);
                }
            }

            if missing > 0 {
                return Err(AppError::Config(format!(
                    "{missing} city data file(s) not found"
                )));
            }
        }
    }

    Ok(())
}
