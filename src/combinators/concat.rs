//! Concatenating a fixed array of sources.

use crate::{SizeClass, Source, Step, size::longest};

/// Produce every element of each source in turn.
///
/// All sources must have the same type, which for closure-backed sources
/// typically means boxing them or using function pointers.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let all: Vec<_> = chain_all([from_iter(0..2), from_iter(5..7), from_iter(9..10)])
///     .items()
///     .collect();
/// assert_eq!(all, vec![0, 1, 5, 6, 9]);
/// ```
pub fn chain_all<const N: usize, S>(sources: [S; N]) -> ChainAll<N, S>
where
    S: Source,
{
    ChainAll {
        sources: sources.map(Some),
        index: 0,
    }
}

/// Concatenation of an array of sources.
///
/// Created via [`chain_all`]. Each source is dropped as soon as it exhausts.
#[derive(Debug, Clone)]
pub struct ChainAll<const N: usize, S> {
    sources: [Option<S>; N],
    index: usize,
}

impl<const N: usize, S> Source for ChainAll<N, S>
where
    S: Source,
{
    type Item = S::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        loop {
            match self.sources.get_mut(self.index) {
                Some(slot) => {
                    if let Some(s) = slot
                        && let Step::Yielded(item) = s.pull()
                    {
                        return Step::Yielded(item);
                    }
                    *slot = None;
                    self.index += 1;
                }
                None => return Step::Complete(()),
            }
        }
    }

    fn size_class(&self) -> SizeClass {
        self.sources[self.index.min(N)..]
            .iter()
            .flatten()
            .fold(SizeClass::Length, |acc, s| longest(acc, s.size_class()))
    }

    fn remaining(&self) -> Option<usize> {
        self.sources[self.index.min(N)..]
            .iter()
            .flatten()
            .try_fold(0usize, |acc, s| acc.checked_add(s.remaining()?))
    }
}
