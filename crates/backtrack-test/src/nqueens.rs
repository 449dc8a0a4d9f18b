//! N-Queens test fixtures.
//!
//! Boards are encoded one queen per row: `columns[row]` is the column of
//! the queen in that row.

/// Known solution counts, indexed by board size.
pub const NQUEENS_COUNTS: [(usize, u64); 9] = [
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
    (9, 352),
];

/// Both 4-queens solutions, in enumeration order.
pub const FOUR_QUEENS: [[i32; 4]; 2] = [[1, 3, 0, 2], [2, 0, 3, 1]];

/// Counts attacking pairs on a complete board.
///
/// Counts column conflicts and diagonal conflicts between all pairs of
/// queens. Zero means the board is a solution.
pub fn count_conflicts(columns: &[i32]) -> usize {
    let mut conflicts = 0;

    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            if columns[i] == columns[j] {
                conflicts += 1;
            }
            let row_diff = (j - i) as i64;
            if (i64::from(columns[j]) - i64::from(columns[i])).abs() == row_diff {
                conflicts += 1;
            }
        }
    }

    conflicts
}

/// Returns the known solution count for `n`, if tabulated.
pub fn known_count(n: usize) -> Option<u64> {
    NQUEENS_COUNTS
        .iter()
        .find(|(size, _)| *size == n)
        .map(|(_, count)| *count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solutions_have_no_conflicts() {
        for board in FOUR_QUEENS {
            assert_eq!(count_conflicts(&board), 0);
        }
        assert_eq!(count_conflicts(&[0]), 0);
    }

    #[test]
    fn test_column_conflict() {
        assert_eq!(count_conflicts(&[0, 2, 0]), 1);
    }

    #[test]
    fn test_diagonal_conflict() {
        // (0,0) and (1,1)
        assert_eq!(count_conflicts(&[0, 1, 3, 2]), 2);
    }

    #[test]
    fn test_known_count() {
        assert_eq!(known_count(4), Some(2));
        assert_eq!(known_count(8), Some(92));
        assert_eq!(known_count(20), None);
    }
}
