//! core::verify
//!
//! Balance checking and result-sequence verification.
//!
//! # Checks
//!
//! - **Single string**: [`check_balanced`] walks the string once, tracking
//!   depth, and reports the first violation.
//! - **Sequence**: [`verify_sequence`] checks a generated sequence against
//!   the result guarantee: right length, balanced, distinct, and exactly
//!   C(n) entries.
//!
//! # Invariants
//!
//! - Never mutates its input
//! - Must be deterministic

use std::collections::HashSet;

use thiserror::Error;

use super::generator::catalan;
use super::types::PairCount;

/// Errors from verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("unexpected character '{ch}' at index {index}")]
    UnexpectedChar { index: usize, ch: char },

    #[error("unmatched ')' at index {index}")]
    UnmatchedClose { index: usize },

    #[error("{count} '(' left unclosed")]
    UnclosedOpen { count: usize },

    #[error("combination {value:?} has length {actual}, expected {expected}")]
    WrongLength {
        value: String,
        actual: usize,
        expected: usize,
    },

    #[error("combination {value:?} is not balanced: {reason}")]
    Unbalanced { value: String, reason: String },

    #[error("duplicate combination {0:?}")]
    Duplicate(String),

    #[error("expected {expected} combinations, found {actual}")]
    WrongCount { expected: u128, actual: usize },
}

/// Result of sequence verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }

    /// One-line summary of the errors, or `None` when verification passed.
    pub fn summary(&self) -> Option<String> {
        if self.ok {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Drop the total-count check, for sequences deliberately cut short.
    ///
    /// Passes if nothing but [`VerifyError::WrongCount`] was reported.
    pub fn without_count_check(self) -> Self {
        let errors: Vec<_> = self
            .errors
            .into_iter()
            .filter(|e| !matches!(e, VerifyError::WrongCount { .. }))
            .collect();
        if errors.is_empty() {
            Self::success()
        } else {
            Self::failure(errors)
        }
    }
}

/// Check that `s` is a balanced parenthesis string.
///
/// Returns the number of pairs on success.
///
/// # Errors
///
/// Returns the first violation found scanning left to right.
///
/// ```
/// use parengen::core::verify::check_balanced;
///
/// assert_eq!(check_balanced("(())()"), Ok(3));
/// assert!(check_balanced("())(").is_err());
/// ```
pub fn check_balanced(s: &str) -> Result<usize, VerifyError> {
    let mut depth = 0usize;
    let mut pairs = 0usize;

    for (index, ch) in s.chars().enumerate() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(VerifyError::UnmatchedClose { index });
                }
                depth -= 1;
                pairs += 1;
            }
            _ => return Err(VerifyError::UnexpectedChar { index, ch }),
        }
    }

    if depth > 0 {
        return Err(VerifyError::UnclosedOpen { count: depth });
    }
    Ok(pairs)
}

/// Whether `s` is a balanced parenthesis string.
pub fn is_balanced(s: &str) -> bool {
    check_balanced(s).is_ok()
}

/// Verify a generated sequence for `pairs`.
///
/// Collects every violation rather than stopping at the first one.
pub fn verify_sequence<S: AsRef<str>>(pairs: PairCount, sequence: &[S]) -> VerifyResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::with_capacity(sequence.len());
    // No string can have an unrepresentable length, so every value mismatches.
    let expected_len = pairs.string_len().unwrap_or(usize::MAX);

    for value in sequence.iter().map(AsRef::as_ref) {
        if value.len() != expected_len {
            errors.push(VerifyError::WrongLength {
                value: value.to_string(),
                actual: value.len(),
                expected: expected_len,
            });
        }
        if let Err(e) = check_balanced(value) {
            errors.push(VerifyError::Unbalanced {
                value: value.to_string(),
                reason: e.to_string(),
            });
        }
        if !seen.insert(value) {
            errors.push(VerifyError::Duplicate(value.to_string()));
        }
    }

    if let Some(expected) = catalan(pairs.get()) {
        if expected != sequence.len() as u128 {
            errors.push(VerifyError::WrongCount {
                expected,
                actual: sequence.len(),
            });
        }
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::generate;

    #[test]
    fn balanced_strings() {
        assert_eq!(check_balanced(""), Ok(0));
        assert_eq!(check_balanced("()"), Ok(1));
        assert_eq!(check_balanced("(()())"), Ok(3));
    }

    #[test]
    fn unmatched_close_reports_index() {
        assert_eq!(
            check_balanced("())"),
            Err(VerifyError::UnmatchedClose { index: 2 })
        );
        assert_eq!(
            check_balanced(")("),
            Err(VerifyError::UnmatchedClose { index: 0 })
        );
    }

    #[test]
    fn unclosed_open_reports_count() {
        assert_eq!(
            check_balanced("((()"),
            Err(VerifyError::UnclosedOpen { count: 2 })
        );
    }

    #[test]
    fn foreign_characters_rejected() {
        assert_eq!(
            check_balanced("(a)"),
            Err(VerifyError::UnexpectedChar { index: 1, ch: 'a' })
        );
        assert!(!is_balanced("[]"));
    }

    #[test]
    fn generated_sequence_verifies() {
        for n in 0..=6 {
            let pairs = PairCount::new(n);
            let result = verify_sequence(pairs, &generate(pairs));
            assert!(result.ok, "n = {n}: {:?}", result.summary());
        }
    }

    #[test]
    fn placeholder_output_fails_verification() {
        // The naive "((( )))" answer is balanced but misses the others.
        let result = verify_sequence(PairCount::new(3), &["((()))"]);
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![VerifyError::WrongCount {
                expected: 5,
                actual: 1
            }]
        );
    }

    #[test]
    fn duplicates_and_bad_lengths_detected() {
        let result = verify_sequence(PairCount::new(2), &["(())", "(())", "()"]);
        assert!(!result.ok);
        assert!(result
            .errors
            .contains(&VerifyError::Duplicate("(())".to_string())));
        assert!(result.errors.iter().any(|e| matches!(
            e,
            VerifyError::WrongLength {
                actual: 2,
                expected: 4,
                ..
            }
        )));
        assert!(result.summary().is_some());
    }

    #[test]
    fn truncated_prefix_passes_without_count_check() {
        let pairs = PairCount::new(3);
        let prefix: Vec<String> = generate(pairs).into_iter().take(2).collect();

        let result = verify_sequence(pairs, &prefix).without_count_check();
        assert!(result.ok);
        assert_eq!(result.summary(), None);
    }

    #[test]
    fn count_check_removal_keeps_other_errors() {
        let result = verify_sequence(PairCount::new(2), &["(())", "(())"]).without_count_check();
        assert!(!result.ok);
        assert_eq!(
            result.summary().as_deref(),
            Some("duplicate combination \"(())\"")
        );
    }
}
