//! Permutation helpers.

/// `n!` for small `n`.
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// Returns true if `values` is a permutation of `[0, values.len())`.
pub fn is_permutation(values: &[i32]) -> bool {
    let mut seen = vec![false; values.len()];
    values.iter().all(|&v| match usize::try_from(v) {
        Ok(i) if i < seen.len() && !seen[i] => {
            seen[i] = true;
            true
        }
        _ => false,
    })
}
