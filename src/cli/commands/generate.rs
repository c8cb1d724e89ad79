//! generate command - Enumerate well-formed parenthesis combinations

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat};
use crate::core::types::PairCount;
use crate::engine::{self, Context, GenerationPolicy};
use crate::ui::output;

/// Per-invocation overrides for `generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output format; falls back to config.
    pub format: Option<OutputFormat>,
    /// Stop after this many combinations.
    pub limit: Option<usize>,
    /// Ceiling override; falls back to config.
    pub max_pairs: Option<PairCount>,
}

/// Generate every combination for the given (or prompted) pair count.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Loaded configuration
/// * `pairs` - Raw pair count, or `None` to prompt
/// * `opts` - Format, limit and ceiling overrides
pub fn generate(
    ctx: &Context,
    config: &Config,
    pairs: Option<&str>,
    opts: &GenerateOptions,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let pairs = super::resolve_pairs(pairs, ctx)?;

    if opts.limit.is_some() && opts.max_pairs.is_some() {
        output::warn("--max-pairs has no effect together with --limit", verbosity);
    }

    let policy = GenerationPolicy {
        max_pairs: opts.max_pairs.unwrap_or_else(|| config.max_pairs()),
        limit: opts.limit,
    };
    let format = opts.format.unwrap_or_else(|| config.format());
    output::debug(
        format!(
            "generate: pairs={} format={} max_pairs={}",
            pairs, format, policy.max_pairs
        ),
        verbosity,
    );

    let report = engine::run_generation(ctx, pairs, &policy)?;
    let rendered = output::render(&report, format).context("Failed to render output")?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .and_then(|()| handle.flush())
        .context("Failed to write output")?;

    Ok(())
}
