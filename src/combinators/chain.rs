use crate::{SizeClass, Source, Step, size::longest};

/// Produce everything from `l`, then everything from `r`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined: Vec<_> = chain(from_iter([1, 2]), from_iter([3])).items().collect();
/// assert_eq!(joined, vec![1, 2, 3]);
/// ```
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Source,
    R: Source<Item = L::Item>,
{
    Chain(Some(l), Some(r))
}

/// Concatenates two sources.
///
/// Created via [`chain`] or [`Source::chain`]. Each side is dropped from
/// memory once it is exhausted, so a finished chain never pulls again.
#[derive(Debug, Clone)]
pub struct Chain<S1, S2>(Option<S1>, Option<S2>);

impl<L, R> Source for Chain<L, R>
where
    L: Source,
    R: Source<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        if let Some(l) = self.0.as_mut() {
            match l.pull() {
                Step::Yielded(item) => return Step::Yielded(item),
                Step::Complete(()) => self.0 = None,
            }
        }
        match self.1.pull() {
            Step::Yielded(item) => Step::Yielded(item),
            Step::Complete(()) => {
                self.1 = None;
                Step::Complete(())
            }
        }
    }

    fn size_class(&self) -> SizeClass {
        match &self.0 {
            Some(l) => longest(l.size_class(), self.1.size_class()),
            None => self.1.size_class(),
        }
    }

    fn remaining(&self) -> Option<usize> {
        let rest = self.1.remaining()?;
        match &self.0 {
            Some(l) => l.remaining()?.checked_add(rest),
            None => Some(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        build::{from_fn, repeatedly},
        iter::from_iter,
    };

    #[test]
    fn test_chain_switches_after_first_exhausts() {
        let mut source = chain(from_iter(vec![1]), from_iter(vec![2, 3]));
        assert_eq!(source.remaining(), Some(3));
        assert_eq!(source.pull().unwrap_yielded(), 1);
        assert_eq!(source.pull().unwrap_yielded(), 2);
        assert!(source.0.is_none());
        assert_eq!(source.pull().unwrap_yielded(), 3);
        assert!(source.pull().is_complete());
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let empty = || from_iter(Vec::<u8>::new());
        assert_eq!(chain(empty(), empty()).items().count(), 0);
        assert_eq!(chain(empty(), from_iter(vec![9u8])).items().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_chain_size_class_is_longest() {
        let finite = from_iter([0u8; 3]);
        assert_eq!(finite.clone().chain(finite.clone()).size_class(), SizeClass::Length);
        assert_eq!(
            finite.chain(from_iter(std::iter::repeat(1u8))).size_class(),
            SizeClass::Infinite
        );
        let unknown = from_iter((0u8..5).filter(|x| x % 2 == 0));
        assert_eq!(
            unknown.chain(repeatedly(|| 0u8)).size_class(),
            SizeClass::Infinite
        );
    }

    #[test]
    fn test_chain_stays_exhausted() {
        let mut flip = true;
        let flaky = from_fn(move || {
            flip = !flip;
            flip.then_some(9)
        });
        let mut source = chain(from_iter(Vec::<i32>::new()), flaky);
        assert!(source.pull().is_complete());
        assert!(source.1.is_none());
        assert!(source.pull().is_complete());
        assert_eq!(source.remaining(), Some(0));
    }
}
