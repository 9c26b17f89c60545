use super::{Indexable, binomial};
use crate::{SizeClass, Source, Step};

/// Enumerate every `K`-element selection of a collection as arrays.
///
/// Same order as [`subsets_k`](super::subsets_k); the selection size is part
/// of the type, so the positions live in a `[usize; K]` and each item is a
/// `[T; K]`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let triples: Vec<[&str; 3]> = subsets_fixed::<_, 3>(&["a", "b", "c", "d"][..])
///     .items()
///     .map(|t| t.map(|s| *s))
///     .collect();
/// assert_eq!(triples, vec![["a", "b", "c"], ["a", "b", "d"], ["a", "c", "d"], ["b", "c", "d"]]);
///
/// let none: Vec<[u8; 0]> = subsets_fixed::<_, 0>(vec![1u8, 2]).items().collect();
/// assert_eq!(none, vec![[]]);
/// ```
pub fn subsets_fixed<C, const K: usize>(collection: C) -> FixedCombinations<C, K>
where
    C: Indexable,
{
    let n = collection.length();
    let done = K > n;
    if done {
        tracing::debug!(n, k = K, "selection larger than collection");
    }
    FixedCombinations {
        collection,
        indices: std::array::from_fn(|i| i),
        emitted: 0,
        done,
    }
}

/// Compile-time-sized combination enumerator.
///
/// Created via [`subsets_fixed`]. Advanced with [`advance_fixed`].
#[derive(Debug, Clone)]
pub struct FixedCombinations<C, const K: usize> {
    collection: C,
    indices: [usize; K],
    emitted: usize,
    done: bool,
}

impl<C, const K: usize> FixedCombinations<C, K>
where
    C: Indexable,
{
    /// Total number of selections, `C(n, K)`, or `None` if it overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        binomial(self.collection.length(), K)
    }
}

/// Advance ascending positions drawn from `0..n` by carrying from the last one.
///
/// The last position moves up if it can; otherwise the positions before it
/// are advanced as a selection from `0..n - 1` and the last position restarts
/// right after them. Returns `false` once no position can move.
///
/// ```rust
/// use lazyseq::subsets::advance_fixed;
///
/// let mut indices = [0, 2, 3];
/// assert!(advance_fixed(&mut indices, 4));
/// assert_eq!(indices, [1, 2, 3]);
/// assert!(!advance_fixed(&mut indices, 4));
/// ```
pub fn advance_fixed(indices: &mut [usize], n: usize) -> bool {
    let Some((last, init)) = indices.split_last_mut() else {
        return false;
    };
    if *last + 1 < n {
        *last += 1;
        return true;
    }
    if n == 0 || !advance_fixed(init, n - 1) {
        return false;
    }
    *last = init.last().map_or(0, |&prev| prev + 1);
    true
}

impl<C, const K: usize> Source for FixedCombinations<C, K>
where
    C: Indexable,
{
    type Item = [C::Item; K];

    fn pull(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete(());
        }
        let selection = self.indices.map(|i| self.collection.at(i));
        self.emitted += 1;
        if !advance_fixed(&mut self.indices, self.collection.length()) {
            tracing::trace!(k = K, emitted = self.emitted, "fixed combinations exhausted");
            self.done = true;
        }
        Step::Yielded(selection)
    }

    fn size_class(&self) -> SizeClass {
        SizeClass::Length
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        self.total().map(|total| total - self.emitted)
    }
}
