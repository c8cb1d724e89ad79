//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output
//! - `--verify`: Check results against the result guarantee

use clap::{Parser, Subcommand};

use crate::core::config::OutputFormat;

/// parengen - Enumerate well-formed combinations of parentheses
#[derive(Parser, Debug)]
#[command(name = "parengen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Verify generated combinations before printing them
    #[arg(long, global = true)]
    pub verify: bool,

    /// Command to run; prompts for a pair count and generates when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Interactive mode as forced by flags, if any.
    ///
    /// Returns:
    /// - `Some(true)` if `--interactive` was explicitly set
    /// - `Some(false)` if `--no-interactive` or `--quiet` was set
    /// - `None` otherwise, leaving the decision to config
    pub fn interactive_override(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every well-formed combination of N pairs of parentheses
    #[command(
        name = "generate",
        long_about = "Generate every well-formed combination of N pairs of parentheses.\n\n\
            Combinations are produced by backtracking, trying '(' before ')' at each \
            step, so the output order is deterministic. There are C(N) of them (the \
            N-th Catalan number). When N is omitted it is read from the console.",
        after_help = "\
EXAMPLES:
    # All five combinations of three pairs
    parengen generate 3

    # Machine-readable output
    parengen generate 4 --format json

    # First ten combinations of a large count
    parengen generate 20 --limit 10

    # Prompt for the count
    parengen generate"
    )]
    Generate {
        /// Number of pairs (prompted for when omitted)
        #[arg(value_name = "N", allow_negative_numbers = true)]
        pairs: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Stop after this many combinations
        #[arg(long, value_name = "K")]
        limit: Option<usize>,

        /// Largest pair count to enumerate without --limit
        #[arg(long, value_name = "M")]
        max_pairs: Option<usize>,
    },

    /// Print how many combinations N pairs produce, without generating them
    #[command(name = "count")]
    Count {
        /// Number of pairs (prompted for when omitted)
        #[arg(value_name = "N", allow_negative_numbers = true)]
        pairs: Option<String>,
    },

    /// Check whether a string is a balanced parenthesis string
    #[command(
        name = "check",
        after_help = "\
EXAMPLES:
    parengen check '(()())'    # balanced (3 pairs)
    parengen check '())('      # exits with status 1"
    )]
    Check {
        /// String to check
        value: String,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    max_pairs      Largest pair count generated without --limit (default 12)
    format         Default output format: lines or json (default lines)
    interactive    Prompt for missing input (default true)

EXAMPLES:
    parengen config list
    parengen config set max_pairs 14"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
