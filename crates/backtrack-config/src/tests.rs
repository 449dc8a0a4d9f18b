//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        problem = "permutations"
        size = 5
        solution_limit = 10

        [seed]
        values = [2, 0]
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.problem, ProblemKind::Permutations);
    assert_eq!(config.size, 5);
    assert_eq!(config.solution_limit, Some(10));
    assert_eq!(config.seed_values(), &[2, 0]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        problem: n_queens
        size: 4
        seed:
          values: [1]
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.problem, ProblemKind::NQueens);
    assert_eq!(config.size, 4);
    assert_eq!(config.solution_limit, None);
    assert_eq!(config.seed_values(), &[1]);
}

#[test]
fn test_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.problem, ProblemKind::NQueens);
    assert_eq!(config.size, DEFAULT_SIZE);
    assert!(config.seed_values().is_empty());
}

#[test]
fn test_unknown_problem_rejected() {
    let err = SearchConfig::from_toml_str(r#"problem = "sudoku""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("definitely/not/here/search.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_problem(ProblemKind::Permutations)
        .with_size(3)
        .with_solution_limit(4)
        .with_seed(vec![1]);

    assert_eq!(config.problem, ProblemKind::Permutations);
    assert_eq!(config.size, 3);
    assert_eq!(config.solution_limit, Some(4));
    assert_eq!(config.seed_values(), &[1]);
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero = SearchConfig::new().with_size(0);
    assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

    let no_solutions = SearchConfig::new().with_solution_limit(0);
    assert!(matches!(no_solutions.validate(), Err(ConfigError::Invalid(_))));

    let long_seed = SearchConfig::new().with_size(2).with_seed(vec![0, 1, 0]);
    assert!(matches!(long_seed.validate(), Err(ConfigError::Invalid(_))));

    let bad_value = SearchConfig::new().with_size(4).with_seed(vec![0, 4]);
    let err = bad_value.validate().unwrap_err();
    assert!(err.to_string().contains("seed value 4 at index 1"));
}

#[test]
fn test_problem_display() {
    assert_eq!(ProblemKind::Permutations.to_string(), "Permutations");
    assert_eq!(ProblemKind::NQueens.to_string(), "NQueens");
}
