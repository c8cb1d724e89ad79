//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine or core to do the work
//! 3. Formats and displays output
//!
//! Raw pair counts arrive as text, from the command line or the console
//! prompt, and are converted by [`resolve_pairs`] before anything else runs.

mod check;
mod completion;
mod config_cmd;
mod count;
mod generate;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use count::count;
pub use generate::{generate, GenerateOptions};

use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::core::types::PairCount;
use crate::engine::Context;
use crate::ui::prompts;
use anyhow::{Context as _, Result};

/// Prompt shown when the pair count is not on the command line.
pub const PAIRS_PROMPT: &str = "Number of parenthesis pairs: ";

/// Dispatch a command to its handler.
///
/// With no subcommand, behaves like `generate` without a count.
pub fn dispatch(command: Option<Command>, ctx: &Context, config: &Config) -> Result<()> {
    match command {
        None => generate::generate(ctx, config, None, &GenerateOptions::default()),
        Some(Command::Generate {
            pairs,
            format,
            limit,
            max_pairs,
        }) => generate::generate(
            ctx,
            config,
            pairs.as_deref(),
            &GenerateOptions {
                format,
                limit,
                max_pairs: max_pairs.map(PairCount::new),
            },
        ),
        Some(Command::Count { pairs }) => count::count(ctx, pairs.as_deref()),
        Some(Command::Check { value }) => check::check(ctx, &value),
        Some(Command::Config { action }) => match action {
            ConfigAction::Get { key } => config_cmd::get(config, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, config, &key, &value),
            ConfigAction::List => config_cmd::list(config),
        },
        Some(Command::Completion { shell }) => completion::completion(shell),
    }
}

/// Turn a raw pair count into a [`PairCount`], prompting when absent.
///
/// # Errors
///
/// Fails with an invalid-argument error for negative or non-integer text,
/// and when the count is missing and prompts are disabled.
pub fn resolve_pairs(raw: Option<&str>, ctx: &Context) -> Result<PairCount> {
    let text = match raw {
        Some(text) => text.to_string(),
        None => prompts::input(PAIRS_PROMPT, ctx.interactive)
            .context("No pair count given; pass N or enable --interactive")?,
    };

    Ok(text.parse::<PairCount>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TypeError;

    fn non_interactive() -> Context {
        Context {
            interactive: false,
            ..Default::default()
        }
    }

    #[test]
    fn resolve_from_argument() {
        let pairs = resolve_pairs(Some("4"), &non_interactive()).unwrap();
        assert_eq!(pairs, PairCount::new(4));
    }

    #[test]
    fn resolve_rejects_invalid_text() {
        for raw in ["-1", "abc", "2.5"] {
            let err = resolve_pairs(Some(raw), &non_interactive()).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<TypeError>(),
                    Some(TypeError::InvalidArgument(_))
                ),
                "unexpected error for {raw:?}: {err:#}"
            );
        }
    }

    #[test]
    fn resolve_missing_without_prompts_fails() {
        let err = resolve_pairs(None, &non_interactive()).unwrap_err();
        assert!(format!("{err:#}").contains("not in interactive mode"));
    }
}
