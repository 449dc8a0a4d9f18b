//! Tests for the standard predicate library.

use std::collections::HashSet;

use backtrack_core::SearchError;
use backtrack_test::nqueens::known_count;
use backtrack_test::{
    brute_force, count_conflicts, factorial, is_permutation, FOUR_QUEENS, NQUEENS_COUNTS,
};

use super::*;

fn all_solutions<P: Predicate>(mut engine: Engine<P>) -> Vec<Vec<i32>> {
    engine.solutions().map(|s| s.unwrap()).collect()
}

#[test]
fn test_distinct_predicate() {
    assert!(Distinct.is_valid(&[3], 0));
    assert!(Distinct.is_valid(&[0, 2, 1], 2));
    assert!(!Distinct.is_valid(&[0, 2, 0], 2));
    assert_eq!(Distinct.name(), "distinct");
}

#[test]
fn test_non_attacking_predicate() {
    assert!(NonAttacking.is_valid(&[0], 0));
    assert!(NonAttacking.is_valid(&[1, 3], 1));
    // Same column.
    assert!(!NonAttacking.is_valid(&[1, 1], 1));
    // Adjacent diagonal, both directions.
    assert!(!NonAttacking.is_valid(&[1, 2], 1));
    assert!(!NonAttacking.is_valid(&[2, 1], 1));
    // Diagonal two rows apart.
    assert!(!NonAttacking.is_valid(&[0, 3, 2], 2));
    assert_eq!(NonAttacking.name(), "non_attacking");
}

#[test]
fn test_permutation_counts() {
    for n in 1..=7 {
        let found = all_solutions(permutations(n).unwrap());
        assert_eq!(found.len() as u64, factorial(n as u64), "n={n}");
        assert!(found.iter().all(|p| is_permutation(p)));

        let unique: HashSet<_> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
    }
}

#[test]
fn test_permutations_are_lexicographic() {
    let found = all_solutions(permutations(4).unwrap());
    assert_eq!(found.first(), Some(&vec![0, 1, 2, 3]));
    assert_eq!(found.last(), Some(&vec![3, 2, 1, 0]));
    assert!(found.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_small_queens() {
    assert_eq!(all_solutions(n_queens(1).unwrap()), vec![vec![0]]);
    assert!(all_solutions(n_queens(2).unwrap()).is_empty());
    assert!(all_solutions(n_queens(3).unwrap()).is_empty());
    assert_eq!(
        all_solutions(n_queens(4).unwrap()),
        FOUR_QUEENS.iter().map(|s| s.to_vec()).collect::<Vec<_>>()
    );
}

#[test]
fn test_queens_known_counts() {
    for (n, expected) in NQUEENS_COUNTS {
        let found = all_solutions(n_queens(n).unwrap());
        assert_eq!(found.len() as u64, expected, "n={n}");
        assert!(found.iter().all(|board| count_conflicts(board) == 0));
    }
}

#[test]
fn test_queens_match_brute_force() {
    for n in 1..=6 {
        let expected = brute_force(n, n as i32, &NonAttacking);
        assert_eq!(all_solutions(n_queens(n).unwrap()), expected, "n={n}");
    }
}

#[test]
fn test_engines_are_square() {
    let engine = n_queens(7).unwrap();
    assert_eq!(engine.count(), 7);
    assert_eq!(engine.top_limit(), 7);

    let engine = permutations(3).unwrap();
    assert_eq!(engine.count(), 3);
    assert_eq!(engine.top_limit(), 3);
}

#[test]
fn test_zero_size_rejected() {
    let err = permutations(0).unwrap_err();
    assert!(matches!(err, SearchError::InvalidArgument { name: "count", .. }));
    assert!(n_queens(0).is_err());
}

#[test]
fn test_oversized_rejected() {
    let too_big = i32::MAX as usize + 1;
    let err = permutations(too_big).unwrap_err();
    assert!(matches!(err, SearchError::InvalidArgument { name: "count", .. }));
}

#[test]
fn test_standard_engine() {
    let mut queens = standard_engine(ProblemKind::NQueens, 8).unwrap();
    assert_eq!(queens.predicate().name(), "non_attacking");
    assert_eq!(queens.count_solutions().unwrap(), known_count(8).unwrap());

    let mut perms = standard_engine(ProblemKind::Permutations, 5).unwrap();
    assert_eq!(
        perms.predicate(),
        &StandardPredicate::Distinct(Distinct)
    );
    assert_eq!(perms.count_solutions().unwrap(), 120);
}

#[test]
fn test_standard_predicate_dispatch() {
    let distinct = StandardPredicate::from(ProblemKind::Permutations);
    let queens = StandardPredicate::from(ProblemKind::NQueens);

    // [0, 2] is a permutation prefix and also a non-attacking placement.
    assert!(distinct.is_valid(&[0, 2], 1));
    assert!(queens.is_valid(&[0, 2], 1));

    // [0, 1] is distinct but on a diagonal.
    assert!(distinct.is_valid(&[0, 1], 1));
    assert!(!queens.is_valid(&[0, 1], 1));
}
