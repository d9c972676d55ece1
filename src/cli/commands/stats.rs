use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::models::FilterSelection;
use crate::ui::prompt::Console;
use crate::ui::report::print_statistics;

/// Handle the `stats` subcommand: one report, no prompts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { city, month, day } = cmd {
        let selection = FilterSelection::new(*city, *month, *day);
        let loader = DataLoader::new(cfg.catalog());
        let table = loader.load_data(&selection)?;

        let mut console = Console::stdio(cfg.color);
        console.say(format!("{} ({} trips)", selection, table.len()))?;

        print_statistics(&mut console, &table, cfg.show_timing)?;
    }
    Ok(())
}
