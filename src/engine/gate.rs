//! engine::gate
//!
//! Operational gating before generation.
//!
//! # Architecture
//!
//! The generator itself accepts any pair count. The number of combinations
//! grows as the Catalan numbers do, so the engine refuses to enumerate more
//! than the configured ceiling unless the caller bounds the output with a
//! limit. Counts whose strings could not be held in memory at all are
//! refused regardless of any limit. Gating produces either a
//! [`ReadyContext`] or a [`Refusal`].
//!
//! # Invariants
//!
//! - Gating never produces a ReadyContext above the ceiling without a limit
//! - Gating never produces a ReadyContext whose strings are unrepresentable
//! - Gating is deterministic given the same inputs

use crate::core::generator::catalan;
use crate::core::types::PairCount;

/// Limits applied to a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    /// Largest pair count enumerated without a limit.
    pub max_pairs: PairCount,
    /// Stop after this many combinations.
    pub limit: Option<usize>,
}

/// Validated inputs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyContext {
    /// Number of pairs to generate.
    pub pairs: PairCount,
    /// C(n), when representable.
    pub expected: Option<u128>,
    /// Output bound carried over from the policy.
    pub limit: Option<usize>,
}

/// What tripped the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalReason {
    /// More pairs than the ceiling, with no limit given.
    AboveCeiling,
    /// A single combination would be longer than any `String` can be.
    Unrepresentable,
}

/// Why a run was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refusal {
    /// What tripped the gate.
    pub reason: RefusalReason,
    /// Requested pair count.
    pub pairs: PairCount,
    /// Ceiling in force.
    pub max_pairs: PairCount,
    /// C(n), when representable.
    pub expected: Option<u128>,
}

impl Refusal {
    /// Human-readable explanation with the ways to proceed.
    pub fn summary(&self) -> String {
        match self.reason {
            RefusalReason::Unrepresentable => format!(
                "{} pairs produce strings too long to represent in memory",
                self.pairs
            ),
            RefusalReason::AboveCeiling => {
                let count = match self.expected {
                    Some(c) => format!("{c} combinations"),
                    None => "more combinations than fit in 128 bits".to_string(),
                };
                format!(
                    "{} pairs would produce {}, above the ceiling of {} pairs \
                     (raise it with --max-pairs or 'parengen config set max_pairs <N>', \
                     or bound the output with --limit)",
                    self.pairs, count, self.max_pairs
                )
            }
        }
    }
}

/// Result of gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult {
    /// Generation may proceed.
    Ready(ReadyContext),
    /// Generation was refused.
    Refused(Refusal),
}

/// Gate a generation request against its policy.
pub fn gate(pairs: PairCount, policy: &GenerationPolicy) -> GateResult {
    let expected = catalan(pairs.get());
    let refuse = |reason| {
        GateResult::Refused(Refusal {
            reason,
            pairs,
            max_pairs: policy.max_pairs,
            expected,
        })
    };

    if pairs.string_len().is_none() {
        return refuse(RefusalReason::Unrepresentable);
    }

    if policy.limit.is_none() && pairs > policy.max_pairs {
        return refuse(RefusalReason::AboveCeiling);
    }

    GateResult::Ready(ReadyContext {
        pairs,
        expected,
        limit: policy.limit,
    })
}
