use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes the configuration (unless `--test`) and lists where each city
/// file is expected.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing bikeshare…");

    if cli.test {
        info("Test mode: configuration file not written.", cfg.color);
    } else if path.exists() {
        warning(
            format!(
                "Configuration already present at {}, left untouched.",
                path.display()
            ),
            cfg.color,
        );
    } else {
        cfg.save(&path)?;
        tracing::info!("configuration written to {}", path.display());
        success(format!("Config file: {}", path.display()), cfg.color);
    }

    println!("📂 Data files:");
    for (city, file) in cfg.catalog().entries() {
        println!("   {:<14} {}", city.as_str(), file.display());
    }

    Ok(())
}
