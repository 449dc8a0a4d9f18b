//! Error types for the backtrack engine.

use thiserror::Error;

/// Main error type for engine construction, seeding and enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A construction parameter is missing or outside its valid range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable description, including the valid range.
        reason: String,
    },

    /// A seed window does not fit the source slice or the assignment buffer.
    #[error(
        "Seed window out of range: offset {offset} + length {length} \
         (source length {source_len}, capacity {capacity})"
    )]
    IndexOutOfRange {
        offset: usize,
        length: usize,
        source_len: usize,
        capacity: usize,
    },

    /// A seeded value lies outside `[0, top_limit)`.
    #[error("Invalid value {value} at seed index {index}: expected 0 <= value < {top_limit}")]
    InvalidValue {
        index: usize,
        value: i32,
        top_limit: i32,
    },

    /// Enumeration observed a cancellation request.
    ///
    /// The engine is left at a step boundary and can be resumed.
    #[error("Search was cancelled")]
    Cancelled,
}

impl SearchError {
    /// Builds an `InvalidArgument` for a value outside `[min, max]`.
    pub fn out_of_range(
        name: &'static str,
        value: impl std::fmt::Display,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
    ) -> Self {
        SearchError::InvalidArgument {
            name,
            reason: format!("{value} is outside the valid range [{min}, {max}]"),
        }
    }

    /// Builds an `InvalidArgument` for a parameter that was never supplied.
    pub fn missing(name: &'static str) -> Self {
        SearchError::InvalidArgument {
            name,
            reason: "a value is required".to_string(),
        }
    }

    /// Returns true for the resumable cancellation variant.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

/// Result type alias for backtrack operations
pub type Result<T> = std::result::Result<T, SearchError>;
