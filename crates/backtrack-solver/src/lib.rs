//! Backtrack Solver Engine
//!
//! This crate provides the enumeration engine and its helpers:
//! - [`Engine`] and [`EngineBuilder`]
//! - Cooperative cancellation ([`CancelFlag`])
//! - Step statistics ([`SearchStats`])
//! - The standard predicate library ([`library`])

pub mod cancel;
pub mod engine;
pub mod library;
pub mod stats;

pub use cancel::CancelFlag;
pub use engine::{Engine, EngineBuilder, Solutions};
pub use library::{
    n_queens, permutations, standard_engine, Distinct, NonAttacking, StandardPredicate,
};
pub use stats::SearchStats;
