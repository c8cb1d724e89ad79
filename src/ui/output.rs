//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout; diagnostics go to stderr and respect the quiet and
//! debug flags. With `--format json`, stdout is a single JSON document.

use std::fmt::Display;

use crate::core::config::OutputFormat;
use crate::engine::GenerationReport;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Render a generation report in the requested format.
///
/// `lines` yields one combination per line, with a trailing newline after
/// each; for zero pairs that is a single empty line.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &GenerationReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Lines => Ok(report
            .combinations
            .iter()
            .map(|c| format!("{c}\n"))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PairCount;

    fn report(combinations: &[&str]) -> GenerationReport {
        GenerationReport {
            pairs: PairCount::new(2),
            count: combinations.len(),
            complete: true,
            combinations: combinations.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn render_lines() {
        let out = render(&report(&["(())", "()()"]), OutputFormat::Lines).unwrap();
        assert_eq!(out, "(())\n()()\n");
    }

    #[test]
    fn render_lines_for_zero_pairs() {
        let out = render(&report(&[""]), OutputFormat::Lines).unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn render_json() {
        let out = render(&report(&["(())", "()()"]), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["pairs"], 2);
        assert_eq!(value["count"], 2);
        assert_eq!(value["combinations"][1], "()()");
    }
}
