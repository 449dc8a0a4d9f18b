//! Seeded random prefixes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for reproducible tests.
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Returns `len` distinct values drawn from `[0, n)`.
///
/// Any such prefix is admissible for the distinctness predicate.
pub fn distinct_prefix(rng: &mut ChaCha8Rng, n: usize, len: usize) -> Vec<i32> {
    assert!(len <= n, "prefix longer than domain");
    let mut values: Vec<i32> = (0..n as i32).collect();
    values.shuffle(rng);
    values.truncate(len);
    values
}
