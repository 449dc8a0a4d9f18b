//! Standard predicates and ready-made engines.
//!
//! - [`Distinct`]: pairwise distinct values, enumerating permutations
//! - [`NonAttacking`]: one queen per row, enumerating N-Queens placements
//!
//! Both problems use `count == top_limit == n`.
//!
//! # Example
//!
//! ```
//! use backtrack_solver::library::{n_queens, permutations};
//!
//! let mut queens = n_queens(4).unwrap();
//! assert_eq!(queens.find_next_owned().unwrap(), Some(vec![1, 3, 0, 2]));
//! assert_eq!(queens.find_next_owned().unwrap(), Some(vec![2, 0, 3, 1]));
//! assert_eq!(queens.find_next_owned().unwrap(), None);
//!
//! assert_eq!(permutations(5).unwrap().count_solutions().unwrap(), 120);
//! ```

use backtrack_config::ProblemKind;
use backtrack_core::{Predicate, Result, SearchError, MAX_COUNT};

use crate::engine::Engine;

/// Rejects a value already used at an earlier position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distinct;

impl Predicate for Distinct {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        !prefix[..last].contains(&prefix[last])
    }

    fn name(&self) -> &str {
        "distinct"
    }
}

/// Treats position `i` as row `i` and its value as the queen's column.
///
/// Rejects a column shared with an earlier row, or one on an earlier
/// queen's diagonal (`|Δrow| == |Δcol|`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonAttacking;

impl Predicate for NonAttacking {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        let column = prefix[last];
        prefix[..last].iter().enumerate().all(|(row, &other)| {
            other != column && column.abs_diff(other) as usize != last - row
        })
    }

    fn name(&self) -> &str {
        "non_attacking"
    }
}

/// Static dispatch over the standard predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardPredicate {
    Distinct(Distinct),
    NonAttacking(NonAttacking),
}

impl From<ProblemKind> for StandardPredicate {
    fn from(kind: ProblemKind) -> Self {
        match kind {
            ProblemKind::Permutations => StandardPredicate::Distinct(Distinct),
            ProblemKind::NQueens => StandardPredicate::NonAttacking(NonAttacking),
        }
    }
}

impl Predicate for StandardPredicate {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        match self {
            StandardPredicate::Distinct(p) => p.is_valid(prefix, last),
            StandardPredicate::NonAttacking(p) => p.is_valid(prefix, last),
        }
    }

    fn name(&self) -> &str {
        match self {
            StandardPredicate::Distinct(p) => p.name(),
            StandardPredicate::NonAttacking(p) => p.name(),
        }
    }
}

/// Enumerates the permutations of `[0, n)` in lexicographic order.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `n` is outside `[1, MAX_COUNT]`.
pub fn permutations(n: usize) -> Result<Engine<Distinct>> {
    square(n, Distinct)
}

/// Enumerates the non-attacking placements of `n` queens, as the column of
/// the queen in each row, in lexicographic order.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `n` is outside `[1, MAX_COUNT]`.
pub fn n_queens(n: usize) -> Result<Engine<NonAttacking>> {
    square(n, NonAttacking)
}

/// Builds the engine for a configured problem kind.
pub fn standard_engine(kind: ProblemKind, n: usize) -> Result<Engine<StandardPredicate>> {
    square(n, StandardPredicate::from(kind))
}

fn square<P: Predicate>(n: usize, predicate: P) -> Result<Engine<P>> {
    let top_limit =
        i32::try_from(n).map_err(|_| SearchError::out_of_range("count", n, 1, MAX_COUNT))?;
    Engine::new(n, top_limit, predicate)
}

#[cfg(test)]
mod tests;
