//! Bounds of the assignment domain.
//!
//! Values are stored as `i32` so that [`UNASSIGNED`] can share the buffer
//! with real values. `MAX_COUNT` keeps one unit of headroom below the value
//! type's maximum so that cursor arithmetic never overflows.

/// Sentinel stored in positions that hold no value yet.
pub const UNASSIGNED: i32 = -1;

/// Largest accepted number of positions.
pub const MAX_COUNT: usize = (i32::MAX - 1) as usize;

/// Largest accepted exclusive upper bound of the value domain.
pub const MAX_TOP_LIMIT: i32 = i32::MAX;

/// Returns true if `value` is inside `[0, top_limit)`.
#[inline]
pub fn in_domain(value: i32, top_limit: i32) -> bool {
    (0..top_limit).contains(&value)
}
