//! Scoped accumulation of expected descriptions.
//!
//! A single stack is shared by the whole parse. Alternations take a [`Mark`]
//! on entry and truncate back to it when a branch succeeds, so nested scopes
//! reuse one allocation instead of building a collector each.

use super::Expected;

/// Stack height captured by [`ExpectedCollector::mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct ExpectedCollector<T> {
    entries: Vec<(usize, Expected<T>)>,
}

impl<T> Default for ExpectedCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExpectedCollector<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn mark(&self) -> Mark {
        Mark(self.entries.len())
    }

    /// Drops everything recorded since `mark`.
    pub fn truncate(&mut self, mark: Mark) {
        self.entries.truncate(mark.0);
    }

    pub fn push(&mut self, location: usize, expected: Expected<T>) {
        self.entries.push((location, expected));
    }

    /// Drops entries recorded since `mark` that lie before `location`.
    ///
    /// Relative order of the survivors is not preserved.
    pub fn prune_shallower(&mut self, mark: Mark, location: usize) {
        let mut i = mark.0;
        while i < self.entries.len() {
            if self.entries[i].0 < location {
                self.entries.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Expecteds recorded exactly at `location`.
    pub fn at(&self, location: usize) -> impl Iterator<Item = &Expected<T>> {
        self.entries
            .iter()
            .filter(move |(loc, _)| *loc == location)
            .map(|(_, expected)| expected)
    }

    /// Expecteds recorded at `location` since `mark`.
    pub fn at_since(&self, mark: Mark, location: usize) -> impl Iterator<Item = &Expected<T>> {
        self.entries[mark.0.min(self.entries.len())..]
            .iter()
            .filter(move |(loc, _)| *loc == location)
            .map(|(_, expected)| expected)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> ExpectedCollector<T> {
    pub fn add(&mut self, location: usize, expected: &Expected<T>) {
        self.entries.push((location, expected.clone()));
    }
}
