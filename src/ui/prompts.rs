//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have the value supplied on
//! the command line or fail with a clear error message.
//!
//! The prompt text goes to stderr so stdout carries only results.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled: no input")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Prompt for a line of text on the console.
///
/// Returns the entered line without its line terminator.
///
/// # Errors
///
/// Returns `PromptError::NotInteractive` if prompts are disabled, and
/// `PromptError::Cancelled` if stdin is at end of input.
pub fn input(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    input_from(&mut reader, &mut io::stderr(), message)
}

/// Prompt using explicit reader and writer.
pub fn input_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<String, PromptError> {
    write!(writer, "{message}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Cancelled);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
