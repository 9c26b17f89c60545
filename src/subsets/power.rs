use bitvec::prelude::*;

use super::Indexable;
use crate::{SizeClass, Source, Step};

/// Enumerate every subset of a collection, starting with the empty set.
///
/// Subsets come out in ascending order of their inclusion mask read as a
/// binary number with position 0 as the least significant bit.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let all: Vec<Vec<i32>> = subsets(vec![1, 2, 3]).items().collect();
/// assert_eq!(all.len(), 8);
/// assert_eq!(all[0], Vec::<i32>::new());
/// assert_eq!(all[3], vec![1, 2]);
/// assert_eq!(all[7], vec![1, 2, 3]);
/// ```
pub fn subsets<C>(collection: C) -> Subsets<C>
where
    C: Indexable,
{
    let n = collection.length();
    Subsets {
        collection,
        mask: bitvec![0; n + 1],
        emitted: 0,
    }
}

/// Power-set enumerator.
///
/// Created via [`subsets`]. The state is an inclusion mask of `n + 1` bits;
/// the extra top bit is set when the counter overflows, which marks the end.
#[derive(Debug, Clone)]
pub struct Subsets<C> {
    collection: C,
    mask: BitVec,
    emitted: usize,
}

impl<C> Subsets<C>
where
    C: Indexable,
{
    /// Total number of subsets, `2^n`, or `None` if it overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        u32::try_from(self.collection.length())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }

    fn is_done(&self) -> bool {
        self.mask[self.collection.length()]
    }
}

/// Binary increment of `mask`, least significant bit first.
///
/// Flips bit 0 and keeps flipping while the flipped bit went from 1 to 0.
/// Returns `false` when every bit was set, leaving the mask all zeros.
pub fn increment_mask(mask: &mut BitSlice) -> bool {
    for i in 0..mask.len() {
        let was_set = mask[i];
        mask.set(i, !was_set);
        if !was_set {
            return true;
        }
    }
    false
}

impl<C> Source for Subsets<C>
where
    C: Indexable,
{
    type Item = Vec<C::Item>;

    fn pull(&mut self) -> Step<Self::Item> {
        if self.is_done() {
            return Step::Complete(());
        }
        let n = self.collection.length();
        let selection = self.mask[..n]
            .iter_ones()
            .map(|i| self.collection.at(i))
            .collect();
        increment_mask(&mut self.mask);
        self.emitted += 1;
        if self.is_done() {
            tracing::trace!(n, emitted = self.emitted, "power set exhausted");
        }
        Step::Yielded(selection)
    }

    fn size_class(&self) -> SizeClass {
        SizeClass::Length
    }

    fn remaining(&self) -> Option<usize> {
        if self.is_done() {
            return Some(0);
        }
        self.total().map(|total| total - self.emitted)
    }
}
