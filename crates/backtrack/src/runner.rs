//! Config-driven search entry point.
//!
//! Builds the standard engine for a [`SearchConfig`], applies its seed and
//! solution limit, and collects the solutions.
//!
//! Logging levels:
//! - **INFO**: Search start/end with totals
//! - **DEBUG**: Seeding, each solution, cancellation and exhaustion (engine)

use std::fmt;

use backtrack_config::{ConfigError, SearchConfig};
use backtrack_core::SearchError;
use backtrack_solver::{standard_engine, CancelFlag, SearchStats};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

/// Error returned by the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Why a run stopped producing solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every solution at or after the seed was produced.
    Exhausted,
    /// The configured solution limit was reached.
    SolutionLimit,
    /// The cancellation flag was observed.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "exhausted"),
            StopReason::SolutionLimit => write!(f, "solution_limit"),
            StopReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Solutions in enumeration order.
    pub solutions: Vec<Vec<i32>>,
    /// Engine counters at the end of the run.
    pub stats: SearchStats,
    pub stop_reason: StopReason,
}

impl SearchOutcome {
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Returns true if the run saw the end of the search space.
    pub fn is_exhausted(&self) -> bool {
        self.stop_reason == StopReason::Exhausted
    }
}

/// Runs the search described by `config` to completion.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the configuration fails validation and
/// [`RunError::Search`] if the engine rejects it.
///
/// # Example
///
/// ```
/// use backtrack::{run_search, ProblemKind, SearchConfig, StopReason};
///
/// let config = SearchConfig::new()
///     .with_problem(ProblemKind::Permutations)
///     .with_size(3)
///     .with_solution_limit(2);
///
/// let outcome = run_search(&config).unwrap();
/// assert_eq!(outcome.solutions, vec![vec![0, 1, 2], vec![0, 2, 1]]);
/// assert_eq!(outcome.stop_reason, StopReason::SolutionLimit);
/// ```
pub fn run_search(config: &SearchConfig) -> Result<SearchOutcome, RunError> {
    // Create a channel but ignore the receiver - no streaming needed
    let (sender, _receiver) = mpsc::unbounded_channel();
    run_search_with_channel(config, None, sender)
}

/// Runs a search, streaming each solution through `sender` as it is found.
///
/// Optionally accepts a cancellation flag. A cancelled run returns the
/// solutions found so far with [`StopReason::Cancelled`]; sending on a
/// closed channel is not an error.
pub fn run_search_with_channel(
    config: &SearchConfig,
    cancel: Option<&CancelFlag>,
    sender: mpsc::UnboundedSender<Vec<i32>>,
) -> Result<SearchOutcome, RunError> {
    config.validate()?;

    let mut engine = standard_engine(config.problem, config.size)?;
    if let Some(flag) = cancel {
        engine.set_cancel_flag(flag.clone());
    }
    let seed = config.seed_values();
    if !seed.is_empty() {
        engine.seed(seed)?;
    }

    info!(
        event = "search_start",
        problem = %config.problem,
        size = config.size,
        solution_limit = ?config.solution_limit,
        seed_len = seed.len(),
    );

    let mut solutions = Vec::new();
    let stop_reason = loop {
        if config
            .solution_limit
            .is_some_and(|limit| solutions.len() as u64 >= limit)
        {
            break StopReason::SolutionLimit;
        }
        match engine.find_next_owned() {
            Ok(Some(solution)) => {
                let _ = sender.send(solution.clone());
                solutions.push(solution);
            }
            Ok(None) => break StopReason::Exhausted,
            Err(SearchError::Cancelled) => break StopReason::Cancelled,
            Err(err) => return Err(err.into()),
        }
    };

    let stats = engine.stats().clone();
    info!(
        event = "search_end",
        stop_reason = %stop_reason,
        solutions = solutions.len(),
        steps = stats.steps,
        predicate_calls = stats.predicate_calls,
        backtracks = stats.backtracks,
        duration_ms = stats.elapsed().as_millis() as u64,
    );

    Ok(SearchOutcome {
        solutions,
        stats,
        stop_reason,
    })
}
