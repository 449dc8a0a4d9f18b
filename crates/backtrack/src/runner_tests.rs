//! Tests for the config-driven runner.

use backtrack_test::nqueens::known_count;
use backtrack_test::{factorial, FOUR_QUEENS};
use tokio::sync::mpsc;

use super::*;

#[test]
fn test_default_config_runs_eight_queens() {
    let outcome = run_search(&SearchConfig::default()).unwrap();
    assert_eq!(outcome.solution_count() as u64, known_count(8).unwrap());
    assert!(outcome.is_exhausted());
    assert_eq!(outcome.stats.solutions, 92);
}

#[test]
fn test_permutations_from_toml() {
    let config = SearchConfig::from_toml_str(
        r#"
        problem = "permutations"
        size = 4
    "#,
    )
    .unwrap();

    let outcome = run_search(&config).unwrap();
    assert_eq!(outcome.solution_count() as u64, factorial(4));
    assert_eq!(outcome.solutions[0], vec![0, 1, 2, 3]);
    assert_eq!(outcome.stop_reason, StopReason::Exhausted);
}

#[test]
fn test_solution_limit() {
    let config = SearchConfig::new()
        .with_problem(ProblemKind::Permutations)
        .with_size(4)
        .with_solution_limit(5);

    let outcome = run_search(&config).unwrap();
    let expected: Vec<_> = permutations(4)
        .unwrap()
        .solutions()
        .take(5)
        .map(|s| s.unwrap())
        .collect();
    assert_eq!(outcome.solutions, expected);
    assert_eq!(outcome.stop_reason, StopReason::SolutionLimit);
    assert!(!outcome.is_exhausted());
}

#[test]
fn test_seeded_run() {
    let config = SearchConfig::new()
        .with_problem(ProblemKind::NQueens)
        .with_size(4)
        .with_seed(vec![2]);

    let outcome = run_search(&config).unwrap();
    assert_eq!(outcome.solutions, vec![FOUR_QUEENS[1].to_vec()]);
}

#[test]
fn test_invalid_config() {
    let config = SearchConfig::new().with_size(0);
    let err = run_search(&config).unwrap_err();
    assert!(matches!(err, RunError::Config(ConfigError::Invalid(_))));

    let config = SearchConfig::new().with_size(3).with_seed(vec![0, 5]);
    assert!(matches!(run_search(&config), Err(RunError::Config(_))));
}

#[test]
fn test_channel_streams_solutions() {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let config = SearchConfig::new().with_size(6);

    let outcome = run_search_with_channel(&config, None, sender).unwrap();

    let mut streamed = Vec::new();
    while let Ok(solution) = receiver.try_recv() {
        streamed.push(solution);
    }
    assert_eq!(streamed, outcome.solutions);
    assert_eq!(streamed.len(), 4);
}

#[test]
fn test_closed_channel_is_ignored() {
    let (sender, receiver) = mpsc::unbounded_channel();
    drop(receiver);

    let config = SearchConfig::new().with_size(5);
    let outcome = run_search_with_channel(&config, None, sender).unwrap();
    assert_eq!(outcome.solution_count(), 10);
}

#[test]
fn test_cancelled_run() {
    let flag = CancelFlag::new();
    flag.cancel();

    let (sender, _receiver) = mpsc::unbounded_channel();
    let config = SearchConfig::new().with_size(6);
    let outcome = run_search_with_channel(&config, Some(&flag), sender).unwrap();

    assert_eq!(outcome.stop_reason, StopReason::Cancelled);
    assert!(outcome.solutions.is_empty());
    assert!(!flag.is_cancelled());
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::Exhausted.to_string(), "exhausted");
    assert_eq!(StopReason::SolutionLimit.to_string(), "solution_limit");
    assert_eq!(StopReason::Cancelled.to_string(), "cancelled");
}

#[test]
fn test_run_error_display() {
    let err = RunError::from(SearchError::Cancelled);
    assert_eq!(err.to_string(), "Search was cancelled");
}
