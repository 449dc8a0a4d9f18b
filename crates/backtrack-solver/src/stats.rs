//! Search statistics.
//!
//! Plain counters updated by the engine's step loop.

use std::time::{Duration, Instant};

/// Counters for one engine, cleared by `Engine::reset`.
///
/// # Example
///
/// ```
/// use backtrack_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_predicate_call();
/// stats.record_solution();
///
/// assert_eq!(stats.steps, 1);
/// assert_eq!(stats.predicate_calls, 1);
/// assert_eq!(stats.solutions, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Step-loop iterations, one per value tried or position retracted.
    pub steps: u64,
    /// Predicate evaluations.
    pub predicate_calls: u64,
    /// Retractions after a position ran out of values.
    pub backtracks: u64,
    /// Complete solutions returned.
    pub solutions: u64,
}

impl SearchStats {
    /// Marks the start of searching. Later calls keep the first instant.
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
    }

    /// Returns the elapsed time since searching started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    #[inline]
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub fn record_predicate_call(&mut self) {
        self.predicate_calls += 1;
    }

    #[inline]
    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    #[inline]
    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    /// Returns the steps per second rate.
    pub fn steps_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.steps as f64 / secs
        } else {
            0.0
        }
    }
}
