//! Core trait for pull-based sequence sources.
//!
//! A [`Source`] produces elements only when asked: each call to
//! [`pull`](Source::pull) returns either [`Step::Yielded`] with the next element
//! or [`Step::Complete`] once the source is exhausted. Nothing happens between
//! pulls, so abandoning a source halfway is just dropping it.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut words = from_iter(["face", "foo", "bar"]).group_by(|w| w.as_bytes()[0]);
//! assert_eq!(words.pull().unwrap_yielded(), vec!["face", "foo"]);
//! assert_eq!(words.pull().unwrap_yielded(), vec!["bar"]);
//! assert!(words.pull().is_complete());
//! ```

use std::hash::Hash;

use crate::{
    combinators::{
        Chain, CycleN, Distinct, GroupBy, Partition, TakeStrict, chain, cycle_n, distinct,
        group_by, partition, partition_step, take_strict,
    },
    error::SeqError,
    iter::SourceIter,
    size::SizeClass,
    step::Step,
};

/// A lazily evaluated sequence that yields elements on demand.
///
/// Each source owns its own cursor. A single consumer is assumed: sharing one
/// source between threads requires external synchronisation, which is the
/// caller's responsibility. A `Clone` source can be copied to iterate again
/// from the position it had when cloned.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut source = from_iter(vec![1, 1, 2]).distinct();
/// assert_eq!(source.pull(), Step::Yielded(1));
/// assert_eq!(source.pull(), Step::Yielded(2));
/// assert_eq!(source.pull(), Step::Complete(()));
/// ```
pub trait Source {
    /// Type of the produced elements
    type Item;

    /// Produce the next element, or report exhaustion.
    fn pull(&mut self) -> Step<Self::Item>;

    /// What is known about the number of elements this source produces.
    fn size_class(&self) -> SizeClass {
        SizeClass::Unknown
    }

    /// Exact number of elements still to come, when it can be known without pulling.
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Keep only the first occurrence of each element.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        distinct(self)
    }

    /// Group elements into consecutive non-overlapping windows of `N`.
    fn partition<const N: usize>(self) -> Partition<Self, N>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        partition(self)
    }

    /// Group elements into windows of `N`, starting a new window every `step` elements.
    fn partition_step<const N: usize>(self, step: usize) -> Result<Partition<Self, N>, SeqError>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        partition_step(self, step)
    }

    /// Collect maximal runs of consecutive elements sharing the same key.
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        group_by(key, self)
    }

    /// Produce all elements of this source, then all elements of `r`.
    fn chain<R>(self, r: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Source<Item = Self::Item>,
    {
        chain(self, r)
    }

    /// Produce exactly `n` elements, reporting an error if the source runs out first.
    fn take_strict(self, n: usize) -> TakeStrict<Self>
    where
        Self: Sized,
    {
        take_strict(self, n)
    }

    /// Replay this source `n` times.
    fn cycle_n(self, n: usize) -> CycleN<Self>
    where
        Self: Sized + Clone,
    {
        cycle_n(self, n)
    }

    /// Erase the concrete type behind a `Box<dyn Source>`.
    fn boxed<'a>(self) -> Box<dyn Source<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Consume the source as a standard [`Iterator`].
    fn items(self) -> SourceIter<Self>
    where
        Self: Sized,
    {
        SourceIter::new(self)
    }
}

impl<S> Source for &'_ mut S
where
    S: Source + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        (**self).pull()
    }

    fn size_class(&self) -> SizeClass {
        (**self).size_class()
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }
}

impl<'a, T> Source for Box<dyn Source<Item = T> + 'a> {
    type Item = T;

    fn pull(&mut self) -> Step<Self::Item> {
        (**self).pull()
    }

    fn size_class(&self) -> SizeClass {
        (**self).size_class()
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }
}

/// `None` behaves as an exhausted source.
impl<S> Source for Option<S>
where
    S: Source,
{
    type Item = S::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        match self {
            Some(s) => s.pull(),
            None => Step::Complete(()),
        }
    }

    fn size_class(&self) -> SizeClass {
        match self {
            Some(s) => s.size_class(),
            None => SizeClass::Length,
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self {
            Some(s) => s.remaining(),
            None => Some(0),
        }
    }
}

impl<L, R> Source for either::Either<L, R>
where
    L: Source,
    R: Source<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }

    fn size_class(&self) -> SizeClass {
        match self {
            either::Either::Left(l) => l.size_class(),
            either::Either::Right(r) => r.size_class(),
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self {
            either::Either::Left(l) => l.remaining(),
            either::Either::Right(r) => r.remaining(),
        }
    }
}
