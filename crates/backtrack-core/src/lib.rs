//! Backtrack Core - Core types and traits for prefix-checked enumeration
//!
//! This crate provides the pieces shared by every backtrack crate:
//! - The error taxonomy and `Result` alias
//! - The [`Predicate`] capability consumed by the engine
//! - Domain bounds and the unassigned sentinel

pub mod domain;
pub mod error;
pub mod predicate;


pub use domain::{in_domain, MAX_COUNT, MAX_TOP_LIMIT, UNASSIGNED};
pub use error::{Result, SearchError};
pub use predicate::{predicate_fn, FnPredicate, Predicate};
