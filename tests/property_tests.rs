//! Property-based tests for the generator.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use parengen::core::generator::{catalan, combinations, generate, try_generate};
use parengen::core::types::PairCount;
use parengen::core::verify::{is_balanced, verify_sequence};

/// Strategy for small pair counts whose output stays cheap to enumerate.
fn small_pairs() -> impl Strategy<Value = usize> {
    0usize..=9
}

/// Strategy for strings over the parenthesis alphabet with even length.
fn paren_string() -> impl Strategy<Value = String> {
    (0usize..=8).prop_flat_map(|n| {
        prop::collection::vec(prop::sample::select(vec!['(', ')']), 2 * n)
            .prop_map(|chars| chars.into_iter().collect())
    })
}

proptest! {
    /// The number of combinations is the Catalan number.
    #[test]
    fn count_is_catalan(n in small_pairs()) {
        let all = generate(PairCount::new(n));
        prop_assert_eq!(Some(all.len() as u128), catalan(n));
    }

    /// Every combination has length 2n, n opens, and never dips below zero.
    #[test]
    fn every_combination_is_well_formed(n in small_pairs()) {
        for s in generate(PairCount::new(n)) {
            prop_assert_eq!(s.len(), 2 * n);
            prop_assert_eq!(s.matches('(').count(), n);
            prop_assert_eq!(s.matches(')').count(), n);
            prop_assert!(is_balanced(&s), "unbalanced: {}", s);
        }
    }

    /// Output is strictly ascending, hence free of duplicates.
    #[test]
    fn output_is_strictly_ascending(n in small_pairs()) {
        let all = generate(PairCount::new(n));
        for window in all.windows(2) {
            prop_assert!(window[0] < window[1], "{} !< {}", window[0], window[1]);
        }
    }

    /// The lazy iterator yields the same sequence as the recursive generator.
    #[test]
    fn iterator_agrees_with_generate(n in small_pairs()) {
        let pairs = PairCount::new(n);
        let lazy: Vec<String> = combinations(pairs).collect();
        prop_assert_eq!(lazy, generate(pairs));
    }

    /// Any prefix taken from the iterator is a prefix of the full output.
    #[test]
    fn limited_iteration_is_a_prefix(n in small_pairs(), k in 0usize..50) {
        let pairs = PairCount::new(n);
        let head: Vec<String> = combinations(pairs).take(k).collect();
        let full = generate(pairs);
        prop_assert_eq!(&head[..], &full[..head.len()]);
    }

    /// A parenthesis string is balanced iff the generator produces it.
    #[test]
    fn balanced_iff_generated(s in paren_string()) {
        let pairs = PairCount::new(s.len() / 2);
        let all: HashSet<String> = generate(pairs).into_iter().collect();
        prop_assert_eq!(is_balanced(&s), all.contains(&s));
    }

    /// Generated sequences always pass full verification.
    #[test]
    fn generated_sequences_verify(n in small_pairs()) {
        let pairs = PairCount::new(n);
        let result = verify_sequence(pairs, &generate(pairs));
        prop_assert!(result.ok, "{:?}", result.summary());
    }

    /// Negative counts are rejected, non-negative ones accepted.
    #[test]
    fn try_generate_sign(n in -50i64..=6) {
        let result = try_generate(n);
        if n < 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.unwrap().len() as u128, catalan(n as usize).unwrap());
        }
    }

    /// Text that is not an integer never parses into a pair count.
    #[test]
    fn non_integer_text_rejected(s in "[a-zA-Z()_ .]{1,12}") {
        prop_assert!(s.parse::<PairCount>().is_err());
    }
}
