//! Brute-force reference enumeration.
//!
//! Walks the full cartesian product `[0, top_limit)^count` in lexicographic
//! order and keeps the assignments whose every prefix passes the predicate.
//! Exponential, so only for small inputs.

use backtrack_core::Predicate;

/// Returns every accepted assignment in lexicographic order.
pub fn brute_force<P: Predicate>(count: usize, top_limit: i32, predicate: &P) -> Vec<Vec<i32>> {
    let mut accepted = Vec::new();
    if count == 0 || top_limit <= 0 {
        return accepted;
    }

    let mut current = vec![0; count];
    loop {
        if (0..count).all(|last| predicate.is_valid(&current[..=last], last)) {
            accepted.push(current.clone());
        }

        // Odometer increment, rightmost digit fastest.
        let mut position = count;
        loop {
            if position == 0 {
                return accepted;
            }
            position -= 1;
            current[position] += 1;
            if current[position] < top_limit {
                break;
            }
            current[position] = 0;
        }
    }
}

/// Returns the solutions at or after `prefix`, in order.
///
/// A solution qualifies when its first `prefix.len()` values compare
/// greater than or equal to `prefix`; a complete prefix only admits
/// solutions strictly after it.
pub fn solutions_from(solutions: &[Vec<i32>], prefix: &[i32]) -> Vec<Vec<i32>> {
    solutions
        .iter()
        .filter(|s| {
            if prefix.len() == s.len() {
                s.as_slice() > prefix
            } else {
                &s[..prefix.len()] >= prefix
            }
        })
        .cloned()
        .collect()
}
