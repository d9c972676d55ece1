//! Status lines for the one-shot commands and section headers for reports.

use ansi_term::Colour;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn colour(self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        }
    }
}

/// One icon-prefixed status line.
pub fn status<T: fmt::Display>(level: Level, msg: T, color: bool) -> String {
    if color {
        format!("{} {}", level.colour().bold().paint(level.icon()), msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

/// Section header, e.g. above each statistics block.
pub fn header(text: &str, color: bool) -> String {
    if color {
        Colour::Blue.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", status(Level::Info, msg, color));
}

pub fn success<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", status(Level::Success, msg, color));
}

pub fn warning<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", status(Level::Warning, msg, color));
}

pub fn error<T: fmt::Display>(msg: T, color: bool) {
    eprintln!("{}", status(Level::Error, msg, color));
}
