// Confirmation capability used to gate destructive actions

use crate::input::SharedInput;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

/// Asks the user a yes/no question
///
/// Returning `Ok(false)` means the user declined; the caller must not act.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Interactive prompt reading its answer from a `SharedInput`
///
/// Only `y` or `yes` (case-insensitive) count as affirmative. Anything else,
/// including end of input, is a decline.
pub struct PromptConfirm<R, W> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: SharedInput<R>, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        write!(self.output, "{} [y/N] ", message)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read confirmation answer")?;
        if read == 0 {
            warn!("Input closed while waiting for confirmation, treating as no");
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}

/// Parse a yes/no answer
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Always answers yes
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Always answers no
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(false)
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self(message))
    }
}
