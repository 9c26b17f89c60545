//! Cartesian product over a tuple of sources.

use crate::{SizeClass, Source, Step, size::longest};

/// A tuple of restartable sources that can be advanced like an odometer.
///
/// Implemented for tuples of zero to eight `Clone` sources with `Clone`
/// items. Component 0 is the fastest-varying position.
pub trait SourceTuple: Clone {
    /// Tuple of the component items
    type Item: Clone;

    /// Pull the first element of every component, or `None` if any is empty.
    fn first(&mut self) -> Option<Self::Item>;

    /// Move `current` to the next tuple in odometer order.
    ///
    /// A component that runs out is restarted from `origin` and the carry
    /// moves on to the next component. Returns `false` once the last
    /// component carries past its end.
    fn advance(&mut self, origin: &Self, current: &mut Self::Item) -> bool;

    /// Longest size class among the components.
    fn size_class(&self) -> SizeClass;

    /// Number of tuples in a full enumeration starting from `self`.
    fn total(&self) -> Option<usize>;

    /// Tuples still to come after the current one, given the cursors' positions.
    fn remaining_after(origin: &Self, cursors: &Self) -> Option<usize>;
}

impl SourceTuple for () {
    type Item = ();

    fn first(&mut self) -> Option<Self::Item> {
        Some(())
    }

    fn advance(&mut self, _origin: &Self, _current: &mut Self::Item) -> bool {
        false
    }

    fn size_class(&self) -> SizeClass {
        SizeClass::Shape
    }

    fn total(&self) -> Option<usize> {
        Some(1)
    }

    fn remaining_after(_origin: &Self, _cursors: &Self) -> Option<usize> {
        Some(0)
    }
}

macro_rules! impl_source_tuple {
    ($($S:ident $idx:tt),+) => {
        impl<$($S),+> SourceTuple for ($($S,)+)
        where
            $($S: Source + Clone, $S::Item: Clone,)+
        {
            type Item = ($($S::Item,)+);

            fn first(&mut self) -> Option<Self::Item> {
                Some(($(self.$idx.pull().yielded_value()?,)+))
            }

            fn advance(&mut self, origin: &Self, current: &mut Self::Item) -> bool {
                $(
                    match self.$idx.pull() {
                        Step::Yielded(item) => {
                            current.$idx = item;
                            return true;
                        }
                        Step::Complete(()) => {
                            self.$idx = origin.$idx.clone();
                            match self.$idx.pull() {
                                Step::Yielded(item) => current.$idx = item,
                                Step::Complete(()) => return false,
                            }
                        }
                    }
                )+
                false
            }

            fn size_class(&self) -> SizeClass {
                let mut class = SizeClass::Shape;
                $(class = longest(class, self.$idx.size_class());)+
                class
            }

            fn total(&self) -> Option<usize> {
                let mut total = 1usize;
                $(total = total.checked_mul(self.$idx.remaining()?)?;)+
                Some(total)
            }

            fn remaining_after(origin: &Self, cursors: &Self) -> Option<usize> {
                let mut acc = 0usize;
                let mut radix = 1usize;
                $(
                    acc = acc.checked_add(cursors.$idx.remaining()?.checked_mul(radix)?)?;
                    radix = radix.checked_mul(origin.$idx.remaining()?)?;
                )+
                let _ = radix;
                Some(acc)
            }
        }
    };
}

impl_source_tuple!(A 0);
impl_source_tuple!(A 0, B 1);
impl_source_tuple!(A 0, B 1, C 2);
impl_source_tuple!(A 0, B 1, C 2, D 3);
impl_source_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_source_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_source_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_source_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Every combination of one element from each source, as a tuple.
///
/// The first source varies fastest. Sources are cloned at construction so
/// that exhausted components can be restarted; an empty component makes the
/// whole product empty, and the product of no sources is a single `()`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs: Vec<_> = product((from_iter([1, 2, 3]), from_iter([4, 5]))).items().collect();
/// assert_eq!(pairs, vec![(1, 4), (2, 4), (3, 4), (1, 5), (2, 5), (3, 5)]);
/// ```
pub fn product<T>(sources: T) -> Product<T>
where
    T: SourceTuple,
{
    Product {
        cursors: sources.clone(),
        origin: sources,
        current: None,
        state: ProductState::Fresh,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductState {
    Fresh,
    Running,
    Done,
}

/// Cartesian product of a tuple of sources in odometer order.
///
/// Created via [`product`].
#[derive(Debug, Clone)]
pub struct Product<T: SourceTuple> {
    origin: T,
    cursors: T,
    current: Option<T::Item>,
    state: ProductState,
}

impl<T> Product<T>
where
    T: SourceTuple,
{
    fn finish(&mut self) -> Step<T::Item> {
        tracing::trace!("product exhausted");
        self.state = ProductState::Done;
        self.current = None;
        Step::Complete(())
    }
}

impl<T> Source for Product<T>
where
    T: SourceTuple,
{
    type Item = T::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        match self.state {
            ProductState::Fresh => match self.cursors.first() {
                Some(first) => {
                    self.state = ProductState::Running;
                    self.current = Some(first.clone());
                    Step::Yielded(first)
                }
                None => self.finish(),
            },
            ProductState::Running => {
                let advanced = match self.current.as_mut() {
                    Some(current) => self.cursors.advance(&self.origin, current),
                    None => false,
                };
                match (advanced, &self.current) {
                    (true, Some(current)) => Step::Yielded(current.clone()),
                    _ => self.finish(),
                }
            }
            ProductState::Done => Step::Complete(()),
        }
    }

    fn size_class(&self) -> SizeClass {
        self.origin.size_class()
    }

    fn remaining(&self) -> Option<usize> {
        match self.state {
            ProductState::Fresh => self.origin.total(),
            ProductState::Running => T::remaining_after(&self.origin, &self.cursors),
            ProductState::Done => Some(0),
        }
    }
}
