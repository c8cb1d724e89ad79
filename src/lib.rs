//! parengen - Enumerate well-formed combinations of parentheses
//!
//! Given n pairs of parentheses, parengen produces every balanced string of
//! length 2n by pruned backtracking, in a deterministic order.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, validates input)
//! - [`engine`] - Orchestrates Gate → Generate → Verify for one run
//! - [`core`] - Domain types, the generator, verification, configuration
//! - [`ui`] - Console prompts and output
//!
//! # Example
//!
//! ```
//! use parengen::core::generator::generate;
//! use parengen::core::types::PairCount;
//!
//! let pairs: PairCount = "3".parse().unwrap();
//! assert_eq!(
//!     generate(pairs),
//!     vec!["((()))", "(()())", "(())()", "()(())", "()()()"]
//! );
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
