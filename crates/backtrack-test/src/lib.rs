//! Shared test fixtures for backtrack crates.
//!
//! This crate provides data and pure functions for testing.
//! It does NOT depend on `backtrack-solver`, so the engine's own tests can
//! use it without a dependency cycle.
//!
//! - [`nqueens`] - Known N-Queens results and a full-board conflict counter
//! - [`permutation`] - Factorials and permutation checks
//! - [`reference`] - Brute-force enumeration used as an oracle
//! - [`prefix`] - Seeded random prefixes for resume tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! backtrack-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use backtrack_test::nqueens::{count_conflicts, FOUR_QUEENS};
//! use backtrack_test::reference::brute_force;
//! ```

pub mod nqueens;
pub mod permutation;
pub mod prefix;
pub mod reference;

pub use nqueens::{count_conflicts, FOUR_QUEENS, NQUEENS_COUNTS};
pub use permutation::{factorial, is_permutation};
pub use prefix::{distinct_prefix, test_rng};
pub use reference::{brute_force, solutions_from};
