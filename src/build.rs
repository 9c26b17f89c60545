//! Building sources from closures.

use crate::{SizeClass, Source, Step};

/// Source driven by a closure returning `Option`.
///
/// Created via [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Create a source from a closure; `None` signals exhaustion.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(countdown.pull().unwrap_yielded(), 1);
/// assert_eq!(countdown.pull().unwrap_yielded(), 2);
/// assert_eq!(countdown.pull().unwrap_yielded(), 3);
/// assert!(countdown.pull().is_complete());
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(f)
}

impl<T, F> Source for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Step<Self::Item> {
        (self.0)().into()
    }
}

/// Calls a function on every pull, never exhausting.
///
/// Created via [`repeatedly`]. Combine with [`take_strict`](crate::Source::take_strict)
/// or a consumer that stops on its own.
#[derive(Clone)]
pub struct Repeatedly<F>(F);

/// Create an infinite source that calls `f` for each element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seed = 1u64;
/// let powers: Vec<u64> = repeatedly(move || {
///     seed *= 2;
///     seed
/// })
/// .items()
/// .take(4)
/// .collect();
/// assert_eq!(powers, vec![2, 4, 8, 16]);
/// ```
pub fn repeatedly<T, F>(f: F) -> Repeatedly<F>
where
    F: FnMut() -> T,
{
    Repeatedly(f)
}

impl<T, F> Source for Repeatedly<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn pull(&mut self) -> Step<Self::Item> {
        Step::Yielded((self.0)())
    }

    fn size_class(&self) -> SizeClass {
        SizeClass::Infinite
    }
}
