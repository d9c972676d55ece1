//! bikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Stats { .. }) => cli::commands::stats::handle(cmd, cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ command-line overrides
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.to_string_lossy().to_string();
    }
    if std::env::var_os("NO_COLOR").is_some() {
        cfg.color = false;
    }

    logging::init(&cfg.log_level);
    tracing::debug!("data directory: {}", cfg.data_dir().display());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
