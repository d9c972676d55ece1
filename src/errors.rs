//! Unified application error type.
//! Every module (data, core, cli, ui, config) returns AppError so the
//! binary has a single place where failures are reported.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed before an answer was given")]
    InputClosed,

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("Data source error ({}): {reason}", .path.display())]
    DataSource { path: PathBuf, reason: String },

    // ---------------------------
    // Filter values
    // ---------------------------
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration ({}): {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

impl AppError {
    /// Shorthand for a `DataSource` error tied to a file.
    pub fn data_source(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::DataSource {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
