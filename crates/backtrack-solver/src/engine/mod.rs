//! Backtracking enumeration engine.
//!
//! The engine walks the tree of partial assignments depth first with an
//! explicit cursor instead of recursion. All search state lives in the
//! assignment buffer and the cursor, so a search can be paused after any
//! solution (or any cancelled step) and resumed by calling
//! [`Engine::find_next`] again.
//!
//! Solutions come out in lexicographic order: positions are filled left to
//! right, values are tried in ascending order, and the rightmost position
//! varies fastest.
//!
//! # Example
//!
//! ```
//! use backtrack_core::predicate_fn;
//! use backtrack_solver::Engine;
//!
//! // Non-decreasing sequences of length 2 over [0, 3).
//! let sorted = predicate_fn(|prefix: &[i32], last: usize| {
//!     last == 0 || prefix[last - 1] <= prefix[last]
//! });
//! let mut engine = Engine::new(2, 3, sorted).unwrap();
//!
//! assert_eq!(engine.find_next().unwrap(), Some(&[0, 0][..]));
//! assert_eq!(engine.find_next_owned().unwrap(), Some(vec![0, 1]));
//! assert_eq!(engine.count_solutions().unwrap(), 4);
//! assert_eq!(engine.find_next().unwrap(), None);
//! ```

mod builder;
mod iter;

use std::fmt;

use backtrack_core::{
    in_domain, Predicate, Result, SearchError, MAX_COUNT, MAX_TOP_LIMIT, UNASSIGNED,
};
use tracing::debug;

use crate::cancel::CancelFlag;
use crate::stats::SearchStats;

pub use builder::EngineBuilder;
pub use iter::Solutions;

/// Depth-first enumerator over assignments of `count` positions to values
/// in `[0, top_limit)`, pruned by a [`Predicate`].
///
/// # Type Parameters
/// * `P` - The validity predicate
pub struct Engine<P> {
    count: usize,
    top_limit: i32,
    predicate: P,
    buffer: Vec<i32>,
    /// Highest assigned position; `None` once the search space is exhausted.
    cursor: Option<usize>,
    cancel: Option<CancelFlag>,
    stats: SearchStats,
}

impl<P: Predicate> Engine<P> {
    /// Creates an engine positioned before the first solution.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if `count` is outside
    /// `[1, MAX_COUNT]` or `top_limit` is outside `[1, MAX_TOP_LIMIT]`.
    pub fn new(count: usize, top_limit: i32, predicate: P) -> Result<Self> {
        check_count(count)?;
        check_top_limit(top_limit)?;

        Ok(Self {
            count,
            top_limit,
            predicate,
            buffer: vec![UNASSIGNED; count],
            cursor: Some(0),
            cancel: None,
            stats: SearchStats::default(),
        })
    }

    /// Returns a builder for configuring an engine step by step.
    pub fn builder() -> EngineBuilder<P> {
        EngineBuilder::new()
    }

    /// Attaches a cancellation flag polled once per step.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Replaces the cancellation flag.
    pub fn set_cancel_flag(&mut self, flag: CancelFlag) {
        self.cancel = Some(flag);
    }

    /// Returns the attached cancellation flag, if any.
    pub fn cancel_flag(&self) -> Option<&CancelFlag> {
        self.cancel.as_ref()
    }

    /// Number of positions.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Exclusive upper bound of the value domain.
    #[inline]
    pub fn top_limit(&self) -> i32 {
        self.top_limit
    }

    /// Highest assigned position, or `None` once exhausted.
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns true once every solution has been produced.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The live assignment buffer. Positions after the cursor hold stale
    /// values or [`UNASSIGNED`].
    pub fn assignment(&self) -> &[i32] {
        &self.buffer
    }

    /// Restarts the enumeration from the first solution.
    pub fn reset(&mut self) {
        self.cursor = Some(0);
        self.buffer[0] = UNASSIGNED;
        self.stats = SearchStats::default();
    }

    /// Copies `values[offset .. offset + length]` into the front of the
    /// buffer and positions the search there.
    ///
    /// A complete seed (`length == count`) leaves the engine exactly as it
    /// was right after returning that solution, so the next
    /// [`find_next`](Self::find_next) yields the solutions after it. A
    /// partial seed positions the engine at the first unassigned position,
    /// so the next call yields the first solution that extends or follows
    /// the prefix. An empty seed is equivalent to [`reset`](Self::reset).
    ///
    /// The prefix is not checked against the predicate. Seeding a prefix the
    /// predicate would reject makes the following enumeration unspecified.
    ///
    /// # Errors
    ///
    /// - [`SearchError::IndexOutOfRange`] if the window does not fit in
    ///   `values` or `length > count`.
    /// - [`SearchError::InvalidValue`] if a value is outside
    ///   `[0, top_limit)`; `index` is the position in `values`.
    ///
    /// On error the engine is left untouched.
    pub fn seed_from(&mut self, values: &[i32], offset: usize, length: usize) -> Result<()> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= values.len() && length <= self.count)
            .ok_or(SearchError::IndexOutOfRange {
                offset,
                length,
                source_len: values.len(),
                capacity: self.count,
            })?;

        let window = &values[offset..end];
        if let Some((index, &value)) = window
            .iter()
            .enumerate()
            .find(|(_, &v)| !in_domain(v, self.top_limit))
        {
            return Err(SearchError::InvalidValue {
                index: offset + index,
                value,
                top_limit: self.top_limit,
            });
        }

        self.buffer[..length].copy_from_slice(window);
        if length == self.count {
            self.cursor = Some(self.count - 1);
        } else {
            self.buffer[length] = UNASSIGNED;
            self.cursor = Some(length);
        }

        debug!(event = "seeded", length, cursor = ?self.cursor);
        Ok(())
    }

    /// Seeds the whole of `prefix`. See [`seed_from`](Self::seed_from).
    pub fn seed(&mut self, prefix: &[i32]) -> Result<()> {
        self.seed_from(prefix, 0, prefix.len())
    }

    /// Advances to the next solution and returns a view of the buffer.
    ///
    /// The returned slice borrows the engine, so it cannot outlive the next
    /// mutating call. Use [`find_next_owned`](Self::find_next_owned) to keep
    /// a solution around.
    ///
    /// Returns `Ok(None)` once the search space is exhausted, and keeps
    /// returning it until [`reset`](Self::reset) or a seed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Cancelled`] when the cancellation flag is
    /// observed. The engine stops at a step boundary and the next call
    /// continues the same enumeration.
    pub fn find_next(&mut self) -> Result<Option<&[i32]>> {
        if self.advance()? {
            Ok(Some(self.buffer.as_slice()))
        } else {
            Ok(None)
        }
    }

    /// Like [`find_next`](Self::find_next), returning an owned snapshot.
    pub fn find_next_owned(&mut self) -> Result<Option<Vec<i32>>> {
        Ok(self.find_next()?.map(<[i32]>::to_vec))
    }

    /// Iterates over the remaining solutions as owned snapshots.
    pub fn solutions(&mut self) -> Solutions<'_, P> {
        Solutions::new(self)
    }

    /// Counts the remaining solutions, leaving the engine exhausted.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::Cancelled`]; solutions found before the
    /// cancellation are not reported.
    pub fn count_solutions(&mut self) -> Result<u64> {
        let mut found = 0;
        while self.advance()? {
            found += 1;
        }
        Ok(found)
    }

    /// Runs the step loop until a complete solution sits in the buffer
    /// (`true`) or the cursor leaves the buffer (`false`).
    fn advance(&mut self) -> Result<bool> {
        let last = self.count - 1;
        self.stats.start();

        while let Some(cursor) = self.cursor {
            if self.cancel.as_ref().is_some_and(CancelFlag::take) {
                debug!(event = "cancelled", cursor, steps = self.stats.steps);
                return Err(SearchError::Cancelled);
            }
            self.stats.record_step();

            self.buffer[cursor] += 1;
            if self.buffer[cursor] >= self.top_limit {
                self.stats.record_backtrack();
                self.cursor = cursor.checked_sub(1);
                continue;
            }

            self.stats.record_predicate_call();
            if !self.predicate.is_valid(&self.buffer[..=cursor], cursor) {
                continue;
            }

            if cursor == last {
                self.stats.record_solution();
                debug!(
                    event = "solution_found",
                    solution = self.stats.solutions,
                    steps = self.stats.steps,
                );
                return Ok(true);
            }

            self.cursor = Some(cursor + 1);
            self.buffer[cursor + 1] = UNASSIGNED;
        }

        if self.stats.steps > 0 {
            debug!(
                event = "search_exhausted",
                predicate = self.predicate.name(),
                solutions = self.stats.solutions,
                steps = self.stats.steps,
                backtracks = self.stats.backtracks,
            );
        }
        Ok(false)
    }
}

impl<P: Predicate> fmt::Debug for Engine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("count", &self.count)
            .field("top_limit", &self.top_limit)
            .field("predicate", &self.predicate.name())
            .field("cursor", &self.cursor)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

fn check_count(count: usize) -> Result<()> {
    if (1..=MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(SearchError::out_of_range("count", count, 1, MAX_COUNT))
    }
}

fn check_top_limit(top_limit: i32) -> Result<()> {
    if (1..=MAX_TOP_LIMIT).contains(&top_limit) {
        Ok(())
    } else {
        Err(SearchError::out_of_range(
            "top_limit",
            top_limit,
            1,
            MAX_TOP_LIMIT,
        ))
    }
}
