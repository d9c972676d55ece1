//! Interactive session: filters → load → statistics → raw rows → restart?

use crate::config::Config;
use crate::data::DataLoader;
use crate::errors::{AppError, AppResult};
use crate::ui::input::collect_filters;
use crate::ui::prompt::Console;
use crate::ui::report::print_statistics;
use crate::ui::viewer::show_raw_data;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter Yes or No.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done,
}

pub struct Session<R, W> {
    loader: DataLoader,
    console: Console<R, W>,
    page_size: usize,
    show_timing: bool,
    iterations: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(cfg: &Config, loader: DataLoader, console: Console<R, W>) -> Self {
        Self {
            loader,
            console,
            page_size: cfg.page_size,
            show_timing: cfg.show_timing,
            iterations: 0,
        }
    }

    /// Run iterations until the user declines to restart or input ends.
    /// A data source error stops the session and is returned.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = SessionState::Running;

        while state == SessionState::Running {
            state = match self.iteration() {
                Ok(next) => next,
                Err(AppError::InputClosed) => {
                    debug!("input closed, ending session");
                    SessionState::Done
                }
                Err(e) => return Err(e),
            };
        }

        info!("session finished after {} iteration(s)", self.iterations);
        Ok(())
    }

    /// One RUNNING pass; returns the next state.
    pub fn iteration(&mut self) -> AppResult<SessionState> {
        self.iterations += 1;

        let selection = collect_filters(&mut self.console)?;
        debug!("filters: {}", selection);

        // the table lives for this iteration only
        let table = self.loader.load_data(&selection)?;

        print_statistics(&mut self.console, &table, self.show_timing)?;
        show_raw_data(&mut self.console, &table, self.page_size)?;

        let restart = self.console.ask(RESTART_PROMPT)?;
        Ok(if restart == "yes" {
            SessionState::Running
        } else {
            SessionState::Done
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
