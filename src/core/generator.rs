//! core::generator
//!
//! Enumeration of well-formed parenthesis combinations.
//!
//! # Algorithm
//!
//! Backtracking over a decision tree of depth `2n`. Each path carries a
//! partial candidate together with its open and close counts, and only two
//! transitions exist:
//!
//! - append `(` when `open < n`
//! - append `)` when `close < open`
//!
//! The second rule keeps every prefix balanced, so invalid branches are
//! never explored. Opens are always tried before closes, which makes the
//! output order deterministic (ascending, since `(` sorts before `)`).
//!
//! # Entry Points
//!
//! - [`generate`] - eager, recursive; returns every combination
//! - [`combinations`] - lazy iterator over the same sequence, one shared buffer
//! - [`try_generate`] - validates a signed integer first
//! - [`catalan`] - the number of combinations, without enumerating
//!
//! # Example
//!
//! ```
//! use parengen::core::generator::generate;
//! use parengen::core::types::PairCount;
//!
//! assert_eq!(generate(PairCount::new(2)), vec!["(())", "()()"]);
//! ```

use super::types::{PairCount, TypeError};

/// Upper bound on up-front reservations for results and the working buffer.
const MAX_PREALLOCATED: usize = 1 << 16;

/// A partial combination and its counters.
///
/// Invariant: `close <= open <= pairs`.
#[derive(Debug, Clone)]
struct Candidate {
    buf: String,
    open: usize,
    close: usize,
    pairs: usize,
}

impl Candidate {
    fn empty(pairs: usize) -> Self {
        Self {
            buf: String::new(),
            open: 0,
            close: 0,
            pairs,
        }
    }

    fn is_complete(&self) -> bool {
        self.close == self.pairs
    }

    fn can_open(&self) -> bool {
        self.open < self.pairs
    }

    fn can_close(&self) -> bool {
        self.close < self.open
    }

    fn push_open(&mut self) {
        self.buf.push('(');
        self.open += 1;
    }

    fn push_close(&mut self) {
        self.buf.push(')');
        self.close += 1;
    }

    fn pop(&mut self) -> Option<char> {
        let ch = self.buf.pop();
        match ch {
            Some('(') => self.open -= 1,
            Some(')') => self.close -= 1,
            _ => {}
        }
        ch
    }

    /// Complete the candidate along the leftmost path: opens, then closes.
    fn fill_leftmost(&mut self) {
        while self.can_open() {
            self.push_open();
        }
        while self.can_close() {
            self.push_close();
        }
    }

    /// Move to the next complete candidate in open-before-close order.
    ///
    /// Unwinds to the deepest `(` whose `)` sibling is still unexplored,
    /// takes that branch, and descends leftmost. Returns `false` once every
    /// branch has been visited.
    fn advance(&mut self) -> bool {
        while let Some(ch) = self.pop() {
            if ch == '(' && self.can_close() {
                self.push_close();
                self.fill_leftmost();
                return true;
            }
        }
        false
    }
}

/// Generate every well-formed combination of `pairs` parenthesis pairs.
///
/// The result holds exactly C(n) distinct strings of length `2n`, in
/// open-before-close order. `n = 0` yields a single empty string. A count
/// whose strings would exceed `isize::MAX` bytes yields nothing.
pub fn generate(pairs: PairCount) -> Vec<String> {
    let Some(len) = pairs.string_len() else {
        return Vec::new();
    };

    let expected = catalan(pairs.get())
        .and_then(|c| usize::try_from(c).ok())
        .unwrap_or(MAX_PREALLOCATED);
    let mut out = Vec::with_capacity(expected.min(MAX_PREALLOCATED));

    let mut candidate = Candidate::empty(pairs.get());
    candidate.buf.reserve(len.min(MAX_PREALLOCATED));
    backtrack(&mut candidate, &mut out);
    out
}

fn backtrack(candidate: &mut Candidate, out: &mut Vec<String>) {
    if candidate.is_complete() {
        out.push(candidate.buf.clone());
        return;
    }

    if candidate.can_open() {
        candidate.push_open();
        backtrack(candidate, out);
        candidate.pop();
    }

    if candidate.can_close() {
        candidate.push_close();
        backtrack(candidate, out);
        candidate.pop();
    }
}

/// Validate a signed pair count and generate its combinations.
///
/// # Errors
///
/// Returns `TypeError::InvalidArgument` if `n` is negative. Nothing is
/// generated in that case.
pub fn try_generate(n: i64) -> Result<Vec<String>, TypeError> {
    let pairs = PairCount::try_from(n)?;
    Ok(generate(pairs))
}

/// Lazily enumerate the combinations of `pairs` parenthesis pairs.
///
/// Yields the same sequence as [`generate`], in the same order, including
/// nothing for counts whose strings cannot be represented.
pub fn combinations(pairs: PairCount) -> Combinations {
    let cursor = if pairs.string_len().is_some() {
        Cursor::Start
    } else {
        Cursor::Exhausted
    };
    Combinations {
        candidate: Candidate::empty(pairs.get()),
        cursor,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    Emitted,
    Exhausted,
}

/// Iterator returned by [`combinations`].
///
/// Walks the decision tree over a single shared buffer: each step unwinds
/// to the last unexplored `)` branch and refills leftmost, so memory stays
/// at one candidate of `2n` characters.
#[derive(Debug, Clone)]
pub struct Combinations {
    candidate: Candidate,
    cursor: Cursor,
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let found = match self.cursor {
            Cursor::Start => {
                self.candidate.fill_leftmost();
                true
            }
            Cursor::Emitted => self.candidate.advance(),
            Cursor::Exhausted => false,
        };

        if found {
            self.cursor = Cursor::Emitted;
            Some(self.candidate.buf.clone())
        } else {
            self.cursor = Cursor::Exhausted;
            None
        }
    }
}

/// The Catalan number C(n), i.e. how many combinations `n` pairs produce.
///
/// Computed with C(k+1) = C(k) * 2(2k+1) / (k+2), dividing out the common
/// factor of C(k) and k+2 first so only C(k+1) itself has to fit. Returns
/// `None` if the value does not fit in a `u128`.
///
/// ```
/// use parengen::core::generator::catalan;
///
/// assert_eq!(catalan(3), Some(5));
/// assert_eq!(catalan(19), Some(1_767_263_190));
/// ```
pub fn catalan(n: usize) -> Option<u128> {
    let mut c: u128 = 1;
    for k in 0..n as u128 {
        let divisor = k + 2;
        let g = gcd(c, divisor);
        // c/g and divisor/g are coprime, so divisor/g divides 2(2k+1).
        c = (c / g).checked_mul(2 * (2 * k + 1) / (divisor / g))?;
    }
    Some(c)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
