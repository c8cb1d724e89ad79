//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`PairCount`] - Validated, non-negative number of parenthesis pairs
//!
//! # Validation
//!
//! Raw input (console text, signed integers from config files) is converted
//! to a [`PairCount`] before any generation happens. Invalid values cannot be
//! represented, so the generator itself never has to fail.
//!
//! # Examples
//!
//! ```
//! use parengen::core::types::PairCount;
//!
//! let pairs: PairCount = "3".parse().unwrap();
//! assert_eq!(pairs.get(), 3);
//!
//! assert!("-1".parse::<PairCount>().is_err());
//! assert!("abc".parse::<PairCount>().is_err());
//! assert!(PairCount::try_from(-4_i64).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A validated number of parenthesis pairs.
///
/// The invariant `n >= 0` is carried by the unsigned representation; the
/// fallible constructors reject negative and non-integer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PairCount(usize);

impl PairCount {
    /// Create a pair count from an unsigned value.
    pub const fn new(pairs: usize) -> Self {
        Self(pairs)
    }

    /// Get the number of pairs.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Length of every complete combination (`2n`).
    ///
    /// `None` when `2n` exceeds `isize::MAX`, the largest possible `String`.
    pub const fn string_len(self) -> Option<usize> {
        match self.0.checked_mul(2) {
            Some(len) if len <= isize::MAX as usize => Some(len),
            _ => None,
        }
    }
}

impl TryFrom<i64> for PairCount {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(TypeError::InvalidArgument(format!(
                "pair count cannot be negative: {value}"
            )));
        }
        usize::try_from(value).map(Self).map_err(|_| {
            TypeError::InvalidArgument(format!("pair count is too large: {value}"))
        })
    }
}

impl FromStr for PairCount {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeError::InvalidArgument(
                "expected an integer, got empty input".into(),
            ));
        }

        let value: i64 = trimmed.parse().map_err(|_| {
            TypeError::InvalidArgument(format!("'{trimmed}' is not an integer"))
        })?;

        Self::try_from(value)
    }
}

impl From<PairCount> for u64 {
    fn from(pairs: PairCount) -> Self {
        pairs.0 as u64
    }
}

impl fmt::Display for PairCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod pair_count {
        use super::*;

        #[test]
        fn parses_plain_integers() {
            assert_eq!("0".parse::<PairCount>().unwrap().get(), 0);
            assert_eq!("3".parse::<PairCount>().unwrap().get(), 3);
            assert_eq!("12".parse::<PairCount>().unwrap().get(), 12);
        }

        #[test]
        fn trims_surrounding_whitespace() {
            assert_eq!(" 4\n".parse::<PairCount>().unwrap().get(), 4);
        }

        #[test]
        fn rejects_negative_text() {
            let err = "-1".parse::<PairCount>().unwrap_err();
            assert!(matches!(err, TypeError::InvalidArgument(ref m) if m.contains("negative")));
        }

        #[test]
        fn rejects_non_integer_text() {
            for input in ["abc", "3.5", "1e3", "three", "(("] {
                let err = input.parse::<PairCount>().unwrap_err();
                assert!(
                    matches!(err, TypeError::InvalidArgument(ref m) if m.contains("not an integer")),
                    "unexpected error for {input:?}: {err}"
                );
            }
        }

        #[test]
        fn rejects_empty_input() {
            assert!("".parse::<PairCount>().is_err());
            assert!("   ".parse::<PairCount>().is_err());
        }

        #[test]
        fn try_from_signed() {
            assert_eq!(PairCount::try_from(5_i64).unwrap(), PairCount::new(5));
            assert!(PairCount::try_from(-1_i64).is_err());
        }

        #[test]
        fn error_message_names_invalid_argument() {
            let err = "x".parse::<PairCount>().unwrap_err();
            assert!(err.to_string().starts_with("invalid argument:"));
        }

        #[test]
        fn serde_rejects_negative() {
            let parsed: Result<PairCount, _> = serde_json::from_str("-2");
            assert!(parsed.is_err());

            let parsed: PairCount = serde_json::from_str("7").unwrap();
            assert_eq!(parsed.get(), 7);
            assert_eq!(serde_json::to_string(&parsed).unwrap(), "7");
        }

        #[test]
        fn string_len_is_twice_pairs() {
            assert_eq!(PairCount::new(0).string_len(), Some(0));
            assert_eq!(PairCount::new(3).string_len(), Some(6));
        }

        #[test]
        fn string_len_unrepresentable() {
            let largest = PairCount::new(isize::MAX as usize / 2);
            assert_eq!(largest.string_len(), Some(isize::MAX as usize - 1));

            if usize::BITS == 64 {
                let max_signed: PairCount = "9223372036854775807".parse().unwrap();
                assert_eq!(max_signed.string_len(), None);
            }
            assert_eq!(PairCount::new(usize::MAX).string_len(), None);
        }
    }
}
