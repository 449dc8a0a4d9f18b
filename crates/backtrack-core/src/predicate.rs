//! Validity predicates.
//!
//! A predicate decides whether the most recently assigned position of a
//! prefix is admissible given the positions before it. The engine calls it
//! once per candidate value, so it should be cheap and must not depend on
//! anything beyond the prefix it is given.
//!
//! # Example
//!
//! ```
//! use backtrack_core::{predicate_fn, Predicate};
//!
//! // Adjacent positions must differ.
//! let no_repeat = predicate_fn(|prefix: &[i32], last: usize| {
//!     last == 0 || prefix[last] != prefix[last - 1]
//! });
//!
//! assert!(no_repeat.is_valid(&[0, 1, 0], 2));
//! assert!(!no_repeat.is_valid(&[0, 1, 1], 2));
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Admissibility test over an assignment prefix.
///
/// `prefix` is `[0 ..= last]` of the live buffer: every element is a value
/// in the engine's domain. Implementations only need to judge `prefix[last]`
/// against `prefix[..last]`, because earlier positions were already accepted
/// when they were assigned.
///
/// The receiver is `&self`; a predicate that memoises internally must use
/// interior mutability and still answer deterministically for equal inputs.
pub trait Predicate {
    /// Returns true if the prefix ending at `last` may still be extended.
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool;

    /// Short name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        (**self).is_valid(prefix, last)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        (**self).is_valid(prefix, last)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Predicate + ?Sized> Predicate for Rc<P> {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        (**self).is_valid(prefix, last)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        (**self).is_valid(prefix, last)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Predicate backed by a closure. Built with [`predicate_fn`].
#[derive(Clone)]
pub struct FnPredicate<F> {
    func: F,
    name: &'static str,
}

impl<F> FnPredicate<F>
where
    F: Fn(&[i32], usize) -> bool,
{
    /// Wraps a closure under the given name.
    pub fn named(name: &'static str, func: F) -> Self {
        Self { func, name }
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&[i32], usize) -> bool,
{
    #[inline]
    fn is_valid(&self, prefix: &[i32], last: usize) -> bool {
        (self.func)(prefix, last)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("name", &self.name)
            .finish()
    }
}

/// Wraps a closure as a [`Predicate`].
pub fn predicate_fn<F>(func: F) -> FnPredicate<F>
where
    F: Fn(&[i32], usize) -> bool,
{
    FnPredicate::named("closure", func)
}
