//! Bridges between [`Source`] and [`std::iter::Iterator`].
//!
//! [`from_iter`] lifts any iterator into a source so it can feed the
//! combinators of this crate, and [`SourceIter`] turns a source back into an
//! iterator so the rest of `std::iter` (`step_by`, `peekable`, `collect`, ...)
//! can consume it.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let windows: Vec<[i32; 2]> = from_iter(1..=6).partition::<2>().items().collect();
//! assert_eq!(windows, vec![[1, 2], [3, 4], [5, 6]]);
//! ```

use std::iter::FusedIterator;

use crate::{SizeClass, Source, Step};

/// Iterator adapter for a [`Source`].
///
/// Pulls from the wrapped source until it completes, and stays exhausted
/// afterwards even if the source itself would not.
#[derive(Debug, Clone)]
pub struct SourceIter<S> {
    state: SourceIterState<S>,
}

#[derive(Debug, Clone)]
enum SourceIterState<S> {
    Active(S),
    Complete,
}

impl<S> SourceIter<S>
where
    S: Source,
{
    /// Create a new iterator from a source.
    pub fn new(source: S) -> Self {
        Self {
            state: SourceIterState::Active(source),
        }
    }

    /// Check if the underlying source has reported exhaustion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SourceIterState::Complete)
    }

    /// Give back the source if it has not completed yet.
    pub fn into_source(self) -> Option<S> {
        match self.state {
            SourceIterState::Active(source) => Some(source),
            SourceIterState::Complete => None,
        }
    }
}

impl<S> Iterator for SourceIter<S>
where
    S: Source,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            SourceIterState::Active(source) => match source.pull() {
                Step::Yielded(item) => Some(item),
                Step::Complete(()) => {
                    self.state = SourceIterState::Complete;
                    None
                }
            },
            SourceIterState::Complete => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            SourceIterState::Active(source) => match (source.remaining(), source.size_class()) {
                (Some(n), _) => (n, Some(n)),
                (None, SizeClass::Infinite) => (usize::MAX, None),
                (None, _) => (0, None),
            },
            SourceIterState::Complete => (0, Some(0)),
        }
    }
}

impl<S> FusedIterator for SourceIter<S> where S: Source {}

/// Source adapter for an [`Iterator`].
///
/// Created via [`from_iter`]. The size class is read off the iterator's
/// `size_hint`: matching bounds mean [`SizeClass::Length`], `(usize::MAX, None)`
/// means [`SizeClass::Infinite`], anything else is [`SizeClass::Unknown`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

/// Lift anything iterable into a [`Source`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut source = from_iter(vec!['a', 'b']);
/// assert_eq!(source.size_class(), SizeClass::Length);
/// assert_eq!(source.pull(), Step::Yielded('a'));
/// assert_eq!(source.remaining(), Some(1));
/// ```
pub fn from_iter<I>(iter: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
{
    IterSource {
        iter: iter.into_iter(),
    }
}

impl<I> Source for IterSource<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        self.iter.next().into()
    }

    fn size_class(&self) -> SizeClass {
        match self.iter.size_hint() {
            (lo, Some(hi)) if lo == hi => SizeClass::Length,
            (usize::MAX, None) => SizeClass::Infinite,
            _ => SizeClass::Unknown,
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lo, Some(hi)) if lo == hi => Some(lo),
            _ => None,
        }
    }
}
