use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{Source, Step};

/// Keep the first occurrence of every element, in original order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let firsts: Vec<_> = distinct(from_iter([1, 1, 2, 1, 2, 4, 1, 2, 3, 4])).items().collect();
/// assert_eq!(firsts, vec![1, 2, 4, 3]);
/// ```
pub fn distinct<S>(source: S) -> Distinct<S>
where
    S: Source,
    S::Item: Hash + Eq + Clone,
{
    Distinct {
        source,
        seen: FxHashMap::default(),
        index: 0,
        done: false,
    }
}

/// Filters a source down to first occurrences.
///
/// Created via [`distinct`] or [`Source::distinct`]. Remembers, for each value
/// seen so far, the position at which it first appeared; an element is emitted
/// only when its own position is that first position. Memory grows with the
/// number of distinct values and is released when the adapter is dropped.
///
/// The size class is always [`SizeClass::Unknown`](crate::SizeClass::Unknown):
/// how many elements survive depends on the data.
#[derive(Debug, Clone)]
pub struct Distinct<S: Source> {
    source: S,
    seen: FxHashMap<S::Item, usize>,
    index: usize,
    done: bool,
}

impl<S> Distinct<S>
where
    S: Source,
{
    /// Number of distinct values observed so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<S> Source for Distinct<S>
where
    S: Source,
    S::Item: Hash + Eq + Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        while !self.done {
            match self.source.pull() {
                Step::Yielded(item) => {
                    let index = self.index;
                    self.index += 1;
                    let first = *self.seen.entry(item.clone()).or_insert(index);
                    if first == index {
                        return Step::Yielded(item);
                    }
                }
                Step::Complete(()) => {
                    tracing::trace!(
                        consumed = self.index,
                        distinct = self.seen.len(),
                        "distinct source exhausted"
                    );
                    self.done = true;
                }
            }
        }
        Step::Complete(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SizeClass, iter::from_iter};

    #[test]
    fn test_distinct_keeps_first_positions() {
        let mut source = distinct(from_iter(["a", "b", "a", "c", "b"]));
        assert_eq!(source.pull().unwrap_yielded(), "a");
        assert_eq!(source.pull().unwrap_yielded(), "b");
        assert_eq!(source.pull().unwrap_yielded(), "c");
        assert!(source.pull().is_complete());
        assert_eq!(source.seen_count(), 3);
        assert_eq!(source.index, 5);
    }

    #[test]
    fn test_distinct_reports_unknown_size() {
        let source = from_iter(0..10).distinct();
        assert_eq!(source.size_class(), SizeClass::Unknown);
        assert_eq!(source.remaining(), None);
    }

    #[test]
    fn test_distinct_empty_and_all_equal() {
        assert_eq!(distinct(from_iter(Vec::<u32>::new())).items().count(), 0);
        assert_eq!(
            distinct(from_iter(vec![7; 50])).items().collect::<Vec<_>>(),
            vec![7]
        );
    }

    #[test]
    fn test_distinct_stays_exhausted() {
        let mut flip = false;
        let flaky = crate::build::from_fn(move || {
            flip = !flip;
            flip.then_some(1)
        });
        let mut source = distinct(flaky);
        assert_eq!(source.pull().unwrap_yielded(), 1);
        assert!(source.pull().is_complete());
        assert!(source.pull().is_complete());
    }
}
