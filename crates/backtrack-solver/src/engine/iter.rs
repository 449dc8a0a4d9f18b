//! Iterator adapter over an engine's remaining solutions.

use std::iter::FusedIterator;

use backtrack_core::{Predicate, Result};

use super::Engine;

/// Iterator returned by [`Engine::solutions`].
///
/// Yields owned snapshots. A cancellation surfaces as one `Err` item;
/// iteration may continue afterwards and resumes where it stopped.
#[derive(Debug)]
pub struct Solutions<'a, P: Predicate> {
    engine: &'a mut Engine<P>,
}

impl<'a, P: Predicate> Solutions<'a, P> {
    pub(super) fn new(engine: &'a mut Engine<P>) -> Self {
        Self { engine }
    }
}

impl<P: Predicate> Iterator for Solutions<'_, P> {
    type Item = Result<Vec<i32>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.engine.find_next_owned().transpose()
    }
}

// Exhaustion is permanent while the engine is mutably borrowed.
impl<P: Predicate> FusedIterator for Solutions<'_, P> {}
