use std::fmt;

use crate::{SizeClass, Source, Step};

/// Collect maximal runs of consecutive elements whose keys are equal.
///
/// Equal keys that are not adjacent start separate runs. Concatenating the
/// runs gives back the original sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = ["face", "foo", "bar", "book", "baz", "zzz"];
/// let runs: Vec<Vec<&str>> = group_by(|w: &&str| w.chars().next(), from_iter(words))
///     .items()
///     .collect();
/// assert_eq!(runs, vec![vec!["face", "foo"], vec!["bar", "book", "baz"], vec!["zzz"]]);
/// ```
pub fn group_by<S, K, F>(key: F, source: S) -> GroupBy<S, F, K>
where
    S: Source,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    GroupBy {
        source,
        key,
        held: None,
        exhausted: false,
    }
}

/// Runs of consecutive elements sharing a key.
///
/// Created via [`group_by`] or [`Source::group_by`]. The element that ends a
/// run belongs to the next one, so it is held over between pulls together with
/// its key.
pub struct GroupBy<S: Source, F, K> {
    source: S,
    key: F,
    held: Option<(K, S::Item)>,
    exhausted: bool,
}

impl<S, F, K> GroupBy<S, F, K>
where
    S: Source,
    F: FnMut(&S::Item) -> K,
{
    fn next_keyed(&mut self) -> Option<(K, S::Item)> {
        if let Some(held) = self.held.take() {
            return Some(held);
        }
        if self.exhausted {
            return None;
        }
        match self.source.pull() {
            Step::Yielded(item) => Some(((self.key)(&item), item)),
            Step::Complete(()) => {
                tracing::trace!("group_by source exhausted");
                self.exhausted = true;
                None
            }
        }
    }
}

impl<S, F, K> Source for GroupBy<S, F, K>
where
    S: Source,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Step<Self::Item> {
        let Some((run_key, first)) = self.next_keyed() else {
            return Step::Complete(());
        };

        let mut run = vec![first];
        while let Some((key, item)) = self.next_keyed() {
            if key != run_key {
                self.held = Some((key, item));
                break;
            }
            run.push(item);
        }
        Step::Yielded(run)
    }

    fn size_class(&self) -> SizeClass {
        SizeClass::Unknown
    }

    fn remaining(&self) -> Option<usize> {
        let drained = self.exhausted || self.source.remaining() == Some(0);
        // a held element left over forms exactly one last run
        drained.then_some(usize::from(self.held.is_some()))
    }
}

impl<S, F, K> fmt::Debug for GroupBy<S, F, K>
where
    S: Source + fmt::Debug,
    S::Item: fmt::Debug,
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("source", &self.source)
            .field("held", &self.held)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
