use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, MonthFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: travel times, popular stations, trip durations and users",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the city CSV files (overrides the configuration)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Explore,

    /// Print the statistics for one filter selection and exit
    Stats {
        /// City: chicago, "new york city" or washington
        #[arg(long, value_parser = parse_city)]
        city: City,

        /// Month (january..june) or all
        #[arg(long, value_parser = parse_month, default_value = "all")]
        month: MonthFilter,

        /// Day of week (monday..sunday) or all
        #[arg(long, value_parser = parse_day, default_value = "all")]
        day: DayFilter,
    },

    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that every city data file exists")]
        check: bool,
    },
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn parse_city(s: &str) -> AppResult<City> {
    City::from_input(&normalize(s)).ok_or_else(|| AppError::InvalidCity(s.to_string()))
}

pub fn parse_month(s: &str) -> AppResult<MonthFilter> {
    MonthFilter::from_input(&normalize(s)).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
}

pub fn parse_day(s: &str) -> AppResult<DayFilter> {
    DayFilter::from_input(&normalize(s)).ok_or_else(|| AppError::InvalidDay(s.to_string()))
}
