//! Line-oriented console prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;

/// Prompt errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Console read or write failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the question was answered.
    #[error("Input closed while waiting for {label}")]
    Closed {
        /// The unanswered prompt.
        label: String,
    },

    /// The answer was not a decimal number.
    #[error("{label}: '{value}' is not a number")]
    InvalidNumber {
        /// The prompt.
        label: String,
        /// What was typed.
        value: String,
    },
}

/// Asks questions on `output` and reads trimmed answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over a reader and a writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label: ` and read one trimmed line.
    pub fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed {
                label: label.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a decimal number.
    pub fn ask_decimal(&mut self, label: &str) -> Result<Decimal, PromptError> {
        let answer = self.ask(label)?;
        answer
            .parse::<Decimal>()
            .map_err(|_| PromptError::InvalidNumber {
                label: label.to_string(),
                value: answer,
            })
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Give back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
