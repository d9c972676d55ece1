use crate::config::Config;
use crate::core::Session;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::ui::prompt::Console;

/// Handle the interactive session (default command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let loader = DataLoader::new(cfg.catalog());
    let console = Console::stdio(cfg.color);

    let mut session = Session::new(cfg, loader, console);
    session.run()
}
