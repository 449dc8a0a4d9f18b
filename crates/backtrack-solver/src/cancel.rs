//! Cooperative cancellation via an `AtomicBool` flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation signal polled by the engine once per step.
///
/// Clones share the same flag, so one clone can be handed to another
/// thread (or to a predicate) while the engine keeps the other.
///
/// The engine consumes the signal when it observes it: one call to
/// [`cancel`](Self::cancel) interrupts exactly one `find_next` call, and
/// the next call continues the enumeration where it stopped.
///
/// # Example
///
/// ```
/// use backtrack_solver::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let remote = flag.clone();
///
/// remote.cancel();
/// assert!(flag.is_cancelled());
/// assert!(flag.take());
/// assert!(!flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing shared flag.
    pub fn from_arc(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns whether the flag is raised without lowering it.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Lowers the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }

    /// Lowers the flag.
    pub fn clear(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    /// Returns the underlying shared flag.
    pub fn as_arc(&self) -> &Arc<AtomicBool> {
        &self.flag
    }
}
