//! Fixed-size windows over a source, advanced by a configurable step.

use std::collections::VecDeque;

use crate::{SizeClass, Source, Step, error::SeqError};

/// Group a source into consecutive, non-overlapping windows of `N` elements.
///
/// A trailing window that cannot be filled is dropped.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let windows: Vec<_> = partition::<_, 3>(from_iter(1..=10)).items().collect();
/// assert_eq!(windows, vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
/// ```
pub fn partition<S, const N: usize>(source: S) -> Partition<S, N>
where
    S: Source,
    S::Item: Clone,
{
    const { assert!(N > 0, "partition window must hold at least one element") };
    Partition::new(source, N)
}

/// Group a source into windows of `N` elements, starting a new window every `step` elements.
///
/// With `step < N` consecutive windows share their last `N - step` elements;
/// with `step > N` the `step - N` elements between windows are discarded.
///
/// # Errors
///
/// Returns [`SeqError::ZeroStep`] if `step` is zero.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let overlapping: Vec<_> = from_iter(1..=9).partition_step::<3>(2)?.items().collect();
/// assert_eq!(overlapping, vec![[1, 2, 3], [3, 4, 5], [5, 6, 7], [7, 8, 9]]);
///
/// let skipping: Vec<_> = from_iter(1..=9).partition_step::<2>(3)?.items().collect();
/// assert_eq!(skipping, vec![[1, 2], [4, 5], [7, 8]]);
/// # Ok::<(), lazyseq::SeqError>(())
/// ```
pub fn partition_step<S, const N: usize>(
    source: S,
    step: usize,
) -> Result<Partition<S, N>, SeqError>
where
    S: Source,
    S::Item: Clone,
{
    const { assert!(N > 0, "partition window must hold at least one element") };
    if step == 0 {
        tracing::debug!(window = N, "rejecting partition with zero step");
        return Err(SeqError::ZeroStep);
    }
    Ok(Partition::new(source, step))
}

/// Windows of `N` elements over a source.
///
/// Created via [`partition`], [`partition_step`] or the matching [`Source`]
/// methods. The buffer holds at most `N` elements and is private to this
/// adapter.
#[derive(Debug, Clone)]
pub struct Partition<S: Source, const N: usize> {
    source: S,
    step: usize,
    buffer: VecDeque<S::Item>,
    started: bool,
    done: bool,
}

impl<S, const N: usize> Partition<S, N>
where
    S: Source,
{
    fn new(source: S, step: usize) -> Self {
        tracing::debug!(window = N, step, "partition configured");
        Self {
            source,
            step,
            buffer: VecDeque::with_capacity(N),
            started: false,
            done: false,
        }
    }

    /// Number of elements in each window.
    pub const fn window(&self) -> usize {
        N
    }

    /// Distance between the starts of consecutive windows.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Elements shared by consecutive windows.
    pub fn overlap(&self) -> usize {
        N.saturating_sub(self.step)
    }

    /// Elements discarded between consecutive windows.
    pub fn skip(&self) -> usize {
        self.step.saturating_sub(N)
    }

    fn finish(&mut self) -> Step<[S::Item; N]> {
        tracing::trace!(window = N, step = self.step, "partition source exhausted");
        self.done = true;
        self.buffer.clear();
        Step::Complete(())
    }
}

impl<S, const N: usize> Source for Partition<S, N>
where
    S: Source,
    S::Item: Clone,
{
    type Item = [S::Item; N];

    fn pull(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete(());
        }

        if self.started {
            let keep = self.overlap();
            let stale = self.buffer.len().saturating_sub(keep);
            self.buffer.drain(..stale);
            for _ in 0..self.skip() {
                if self.source.pull().is_complete() {
                    return self.finish();
                }
            }
        }

        while self.buffer.len() < N {
            match self.source.pull() {
                Step::Yielded(item) => self.buffer.push_back(item),
                Step::Complete(()) => return self.finish(),
            }
        }

        self.started = true;
        Step::Yielded(std::array::from_fn(|i| self.buffer[i].clone()))
    }

    fn size_class(&self) -> SizeClass {
        match self.source.size_class() {
            SizeClass::Infinite => SizeClass::Infinite,
            SizeClass::Unknown => SizeClass::Unknown,
            SizeClass::Length | SizeClass::Shape => SizeClass::Length,
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let left = self.source.remaining()?;
        if self.started {
            // every later window consumes exactly `step` fresh elements
            Some(left / self.step)
        } else if left >= N {
            Some(1 + (left - N) / self.step)
        } else {
            Some(0)
        }
    }
}
