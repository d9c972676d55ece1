//! Line-oriented console over any reader/writer pair.
//! The binary uses stdin/stdout; tests drive it with in-memory buffers.

use crate::errors::{AppError, AppResult};
use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio(color: bool) -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout()).with_color(color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub fn say<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Write text as is (no newline added).
    pub fn write_raw(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Print `prompt` and read one answer, trimmed and lowercased.
    /// A closed input yields `AppError::InputClosed`.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(AppError::InputClosed);
        }

        Ok(answer.trim().to_lowercase())
    }

    /// Ask until `parse` accepts the normalized answer. After a rejected
    /// answer `error` is printed and `retry_prompt` is used.
    pub fn prompt_until<T, F>(
        &mut self,
        prompt: &str,
        retry_prompt: &str,
        error: &str,
        parse: F,
    ) -> AppResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut answer = self.ask(prompt)?;
        loop {
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(error)?;
            answer = self.ask(retry_prompt)?;
        }
    }

    /// Yes/no question: `Some(true)` on "yes", `Some(false)` on "no",
    /// `None` on anything else.
    pub fn ask_yes_no(&mut self, prompt: &str) -> AppResult<Option<bool>> {
        let answer = self.ask(prompt)?;
        Ok(match answer.as_str() {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        })
    }
}
