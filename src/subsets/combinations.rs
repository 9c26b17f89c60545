use super::{Indexable, binomial};
use crate::{SizeClass, Source, Step};

/// Enumerate every `k`-element selection of a collection in lexicographic order.
///
/// Asking for more elements than the collection holds gives an empty
/// enumeration; `k = 0` gives a single empty selection.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs: Vec<Vec<char>> = subsets_k(vec!['a', 'b', 'c'], 2).items().collect();
/// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
///
/// assert_eq!(subsets_k(vec![1, 2], 3).items().count(), 0);
/// ```
pub fn subsets_k<C>(collection: C, k: usize) -> KCombinations<C>
where
    C: Indexable,
{
    let n = collection.length();
    let done = k > n;
    if done {
        tracing::debug!(n, k, "selection larger than collection");
    }
    KCombinations {
        collection,
        indices: if done { Vec::new() } else { (0..k).collect() },
        k,
        emitted: 0,
        done,
    }
}

/// Runtime-sized combination enumerator.
///
/// Created via [`subsets_k`]. Holds the ascending positions of the current
/// selection and advances them with [`next_combination`].
#[derive(Debug, Clone)]
pub struct KCombinations<C> {
    collection: C,
    indices: Vec<usize>,
    k: usize,
    emitted: usize,
    done: bool,
}

impl<C> KCombinations<C>
where
    C: Indexable,
{
    /// Number of elements in each selection.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Total number of selections, `C(n, k)`, or `None` if it overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        binomial(self.collection.length(), self.k)
    }
}

/// Advance ascending positions `indices` (drawn from `0..n`) to their
/// lexicographic successor.
///
/// Finds the rightmost position that is still below its largest possible
/// value, increments it, and resets every position to its right to
/// consecutive values. Returns `false`, leaving `indices` untouched, when the
/// selection was already the last one.
///
/// ```rust
/// use lazyseq::subsets::next_combination;
///
/// let mut indices = [0, 3, 4];
/// assert!(next_combination(&mut indices, 5));
/// assert_eq!(indices, [1, 2, 3]);
///
/// let mut last = [2, 3, 4];
/// assert!(!next_combination(&mut last, 5));
/// ```
pub fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    debug_assert!(k <= n, "cannot select {k} positions from {n}");
    for pos in (0..k).rev() {
        if indices[pos] < n - k + pos {
            indices[pos] += 1;
            for next in pos + 1..k {
                indices[next] = indices[next - 1] + 1;
            }
            return true;
        }
    }
    false
}

impl<C> Source for KCombinations<C>
where
    C: Indexable,
{
    type Item = Vec<C::Item>;

    fn pull(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete(());
        }
        let selection = self
            .indices
            .iter()
            .map(|&i| self.collection.at(i))
            .collect();
        self.emitted += 1;
        if !next_combination(&mut self.indices, self.collection.length()) {
            tracing::trace!(k = self.k, emitted = self.emitted, "combinations exhausted");
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
