//! cli
//!
//! Command-line interface layer for parengen.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Validate raw input (the pair count) into strong types
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads configuration,
//! and dispatches to command handlers, which call into [`crate::engine`] and
//! [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::engine;
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load().context("Failed to load config")?;

    // CLI flags take precedence over config.
    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli
            .interactive_override()
            .unwrap_or_else(|| config.interactive()),
        verify: cli.verify,
    };

    if let Some(path) = config.global_config_loaded_from() {
        crate::ui::output::debug(
            format!("loaded config from {}", path.display()),
            ctx.verbosity(),
        );
    }

    commands::dispatch(cli.command, &ctx, &config)
}
