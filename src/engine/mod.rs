//! engine
//!
//! Orchestrates a generation run: Gate -> Generate -> Verify.
//!
//! # Architecture
//!
//! 1. **Gate**: Check the request against the operational ceiling
//! 2. **Generate**: Enumerate eagerly, or lazily up to a limit
//! 3. **Verify**: Optionally confirm the result guarantee holds
//!
//! The CLI layer validates raw input into a [`PairCount`] before calling the
//! engine, so nothing here deals with text.
//!
//! # Invariants
//!
//! - No combination is produced when gating refuses the request
//! - Verification failure after generation indicates a bug

pub mod gate;

pub use gate::{gate, GateResult, GenerationPolicy, ReadyContext, Refusal, RefusalReason};

use serde::Serialize;

use crate::core::generator::{combinations, generate};
use crate::core::types::PairCount;
use crate::core::verify::verify_sequence;
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and config that affect
/// command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Verify results after generation.
    pub verify: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            debug: false,
            quiet: false,
            interactive: true,
            verify: false,
        }
    }
}

impl Context {
    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Errors from engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Gating refused the request.
    #[error("refused: {0}")]
    Refused(String),

    /// Verification failed.
    #[error("verification failed: {0}")]
    Verify(String),
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Number of pairs requested.
    pub pairs: PairCount,
    /// Number of combinations produced.
    pub count: usize,
    /// Whether every combination was produced (false when a limit cut it short).
    pub complete: bool,
    /// The combinations, in generation order.
    pub combinations: Vec<String>,
}

/// Run a full generation lifecycle.
///
/// # Errors
///
/// Returns `EngineError::Refused` if gating fails, and
/// `EngineError::Verify` if `ctx.verify` is set and the result violates the
/// result guarantee.
pub fn run_generation(
    ctx: &Context,
    pairs: PairCount,
    policy: &GenerationPolicy,
) -> Result<GenerationReport, EngineError> {
    let verbosity = ctx.verbosity();

    // 1. Gate
    let ready = match gate(pairs, policy) {
        GateResult::Ready(ready) => ready,
        GateResult::Refused(refusal) => {
            return Err(EngineError::Refused(refusal.summary()));
        }
    };
    output::debug(
        format!(
            "gate passed: pairs={} expected={} limit={:?}",
            ready.pairs,
            ready
                .expected
                .map_or_else(|| "overflow".to_string(), |c| c.to_string()),
            ready.limit
        ),
        verbosity,
    );

    // 2. Generate
    let produced: Vec<String> = match ready.limit {
        Some(limit) => combinations(ready.pairs).take(limit).collect(),
        None => generate(ready.pairs),
    };
    let complete = ready
        .expected
        .is_some_and(|expected| expected == produced.len() as u128);
    output::debug(
        format!(
            "generated {} combinations (complete: {})",
            produced.len(),
            complete
        ),
        verbosity,
    );

    // 3. Verify
    if ctx.verify {
        let mut result = verify_sequence(ready.pairs, &produced);
        if !complete {
            result = result.without_count_check();
        }
        if let Some(summary) = result.summary() {
            return Err(EngineError::Verify(summary));
        }
        output::debug("verification passed", verbosity);
    }

    Ok(GenerationReport {
        pairs: ready.pairs,
        count: produced.len(),
        complete,
        combinations: produced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max: usize, limit: Option<usize>) -> GenerationPolicy {
        GenerationPolicy {
            max_pairs: PairCount::new(max),
            limit,
        }
    }

    fn verifying() -> Context {
        Context {
            verify: true,
            ..Default::default()
        }
    }

    #[test]
    fn full_run_is_complete_and_verified() {
        let report = run_generation(&verifying(), PairCount::new(3), &policy(12, None)).unwrap();

        assert_eq!(report.count, 5);
        assert!(report.complete);
        assert_eq!(report.combinations[0], "((()))");
        assert_eq!(report.combinations[4], "()()()");
    }

    #[test]
    fn zero_pairs_reports_single_empty_combination() {
        let report = run_generation(&verifying(), PairCount::new(0), &policy(12, None)).unwrap();

        assert_eq!(report.combinations, vec![String::new()]);
        assert!(report.complete);
    }

    #[test]
    fn limit_truncates_and_still_verifies() {
        let report =
            run_generation(&verifying(), PairCount::new(15), &policy(12, Some(4))).unwrap();

        assert_eq!(report.count, 4);
        assert!(!report.complete);
        assert!(report.combinations.iter().all(|c| c.len() == 30));
    }

    #[test]
    fn limit_above_total_is_complete() {
        let report =
            run_generation(&verifying(), PairCount::new(2), &policy(12, Some(100))).unwrap();

        assert_eq!(report.combinations, vec!["(())", "()()"]);
        assert!(report.complete);
    }

    #[test]
    fn refused_above_ceiling() {
        let err = run_generation(&Context::default(), PairCount::new(5), &policy(4, None))
            .unwrap_err();
        assert!(matches!(err, EngineError::Refused(_)));
    }

    #[test]
    fn unrepresentable_length_refused_despite_limit() {
        let huge = PairCount::new(usize::MAX / 2 + 1);
        let err = run_generation(&Context::default(), huge, &policy(12, Some(1))).unwrap_err();
        match err {
            EngineError::Refused(msg) => assert!(msg.contains("too long to represent")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let report =
            run_generation(&Context::default(), PairCount::new(1), &policy(12, None)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["pairs"], 1);
        assert_eq!(json["count"], 1);
        assert_eq!(json["complete"], true);
        assert_eq!(json["combinations"][0], "()");
    }
}
