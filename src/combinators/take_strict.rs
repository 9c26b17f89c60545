use crate::{SizeClass, Source, Step, error::SeqError, size::shortest};

/// Take exactly `n` elements, reporting an error if the source has fewer.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut three = from_iter(1..=2).take_strict(3);
/// assert_eq!(three.pull(), Step::Yielded(Ok(1)));
/// assert_eq!(three.pull(), Step::Yielded(Ok(2)));
/// assert_eq!(three.pull(), Step::Yielded(Err(SeqError::SourceTooShort { expected: 3, got: 2 })));
/// assert!(three.pull().is_complete());
/// ```
pub fn take_strict<S>(source: S, n: usize) -> TakeStrict<S>
where
    S: Source,
{
    TakeStrict {
        source,
        n,
        taken: 0,
        done: n == 0,
    }
}

/// Strict truncation of a source to `n` elements.
///
/// Created via [`take_strict`] or [`Source::take_strict`]. Elements are wrapped
/// in `Ok`; if the source ends early a single `Err` is produced before
/// completing.
#[derive(Debug, Clone)]
pub struct TakeStrict<S> {
    source: S,
    n: usize,
    taken: usize,
    done: bool,
}

impl<S> Source for TakeStrict<S>
where
    S: Source,
{
    type Item = Result<S::Item, SeqError>;

    fn pull(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete(());
        }
        match self.source.pull() {
            Step::Yielded(item) => {
                self.taken += 1;
                self.done = self.taken == self.n;
                Step::Yielded(Ok(item))
            }
            Step::Complete(()) => {
                tracing::debug!(expected = self.n, got = self.taken, "strict take ran short");
                self.done = true;
                Step::Yielded(Err(SeqError::SourceTooShort {
                    expected: self.n,
                    got: self.taken,
                }))
            }
        }
    }

    fn size_class(&self) -> SizeClass {
        shortest(self.source.size_class(), SizeClass::Length)
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let left = self.n - self.taken;
        match self.source.remaining() {
            Some(available) if available >= left => Some(left),
            Some(available) => Some(available + 1),
            None if self.source.size_class() == SizeClass::Infinite => Some(left),
            None => None,
        }
    }
}
