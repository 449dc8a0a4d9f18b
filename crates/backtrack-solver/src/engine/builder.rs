//! Builder for engine configuration.

use backtrack_core::{Predicate, Result, SearchError};

use super::Engine;
use crate::cancel::CancelFlag;

/// Builder for creating engines field by field.
///
/// Unlike [`Engine::new`], the predicate may be left out; `build` then
/// reports it as an invalid argument.
///
/// # Example
///
/// ```
/// use backtrack_solver::{CancelFlag, EngineBuilder};
/// use backtrack_solver::library::Distinct;
///
/// let mut engine = EngineBuilder::new()
///     .with_count(3)
///     .with_top_limit(3)
///     .with_predicate(Distinct)
///     .with_cancel_flag(CancelFlag::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.count_solutions().unwrap(), 6);
/// ```
#[derive(Debug)]
pub struct EngineBuilder<P> {
    count: Option<usize>,
    top_limit: Option<i32>,
    predicate: Option<P>,
    cancel: Option<CancelFlag>,
}

impl<P> Default for EngineBuilder<P> {
    fn default() -> Self {
        Self {
            count: None,
            top_limit: None,
            predicate: None,
            cancel: None,
        }
    }
}

impl<P: Predicate> EngineBuilder<P> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of positions.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the exclusive upper bound of the value domain.
    pub fn with_top_limit(mut self, top_limit: i32) -> Self {
        self.top_limit = Some(top_limit);
        self
    }

    /// Sets the validity predicate.
    pub fn with_predicate(mut self, predicate: P) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the cancellation flag.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] naming the first missing or
    /// out-of-range parameter, checked in the order count, top limit,
    /// predicate.
    pub fn build(self) -> Result<Engine<P>> {
        let count = self.count.ok_or_else(|| SearchError::missing("count"))?;
        let top_limit = self.top_limit.ok_or_else(|| SearchError::missing("top_limit"))?;
        super::check_count(count)?;
        super::check_top_limit(top_limit)?;
        let predicate = self.predicate.ok_or_else(|| SearchError::missing("predicate"))?;

        let mut engine = Engine::new(count, top_limit, predicate)?;
        engine.cancel = self.cancel;
        Ok(engine)
    }
}
