//! core
//!
//! Core domain types and operations for parengen.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PairCount and its validation errors
//! - [`generator`] - Backtracking enumeration of balanced combinations
//! - [`verify`] - Balance checks and result-sequence verification
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Raw input is validated into strong types before generation starts
//! - Generation is pure and deterministic
//! - Verification never mutates what it checks

pub mod config;
pub mod generator;
pub mod types;
pub mod verify;
