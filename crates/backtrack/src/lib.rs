//! Backtrack - Resumable Prefix-Checked Enumeration in Rust
//!
//! Enumerate every assignment of a fixed number of positions to values in
//! `[0, top_limit)` that a validity predicate accepts, one solution at a
//! time, with pause, resume and cancellation.
//!
//! # Example
//!
//! ```rust
//! use backtrack::prelude::*;
//!
//! let mut queens = n_queens(4).unwrap();
//! assert_eq!(queens.find_next().unwrap(), Some(&[1, 3, 0, 2][..]));
//!
//! // Pick up from a known solution.
//! let mut resumed = n_queens(4).unwrap();
//! resumed.seed(&[1, 3, 0, 2]).unwrap();
//! assert_eq!(resumed.find_next_owned().unwrap(), Some(vec![2, 0, 3, 1]));
//! ```

// Core types
pub use backtrack_core::{
    in_domain, predicate_fn, FnPredicate, Predicate, SearchError, MAX_COUNT, MAX_TOP_LIMIT,
    UNASSIGNED,
};

// Configuration
pub use backtrack_config::{ConfigError, ProblemKind, SearchConfig, SeedConfig};

// Engine and standard predicates
pub use backtrack_solver::{
    library, n_queens, permutations, standard_engine, CancelFlag, Distinct, Engine,
    EngineBuilder, NonAttacking, SearchStats, Solutions, StandardPredicate,
};

mod runner;
pub use runner::{run_search, run_search_with_channel, RunError, SearchOutcome, StopReason};

#[cfg(test)]
mod runner_tests;

pub mod prelude {
    pub use super::{n_queens, permutations, predicate_fn, standard_engine};
    pub use super::{CancelFlag, Engine, EngineBuilder, Predicate, SearchError};
    pub use super::{ProblemKind, SearchConfig};
    pub use super::{run_search, SearchOutcome, StopReason};
}
