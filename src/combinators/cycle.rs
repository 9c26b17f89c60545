use crate::{SizeClass, Source, Step, size::longest};

/// Replay a source `n` times.
///
/// The source is cloned at construction and every round restarts from that
/// clone. Zero rounds, or a source that yields nothing, gives an empty result.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let twice: Vec<_> = cycle_n(from_iter(['a', 'b']), 2).items().collect();
/// assert_eq!(twice, vec!['a', 'b', 'a', 'b']);
/// ```
pub fn cycle_n<S>(source: S, n: usize) -> CycleN<S>
where
    S: Source + Clone,
{
    let current = (n > 0).then(|| source.clone());
    CycleN {
        origin: source,
        current,
        rounds_left: n.saturating_sub(1),
        fresh_round: true,
    }
}

/// A source repeated a fixed number of times.
///
/// Created via [`cycle_n`] or [`Source::cycle_n`].
#[derive(Debug, Clone)]
pub struct CycleN<S> {
    origin: S,
    current: Option<S>,
    rounds_left: usize,
    fresh_round: bool,
}

impl<S> Source for CycleN<S>
where
    S: Source + Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        while let Some(current) = self.current.as_mut() {
            match current.pull() {
                Step::Yielded(item) => {
                    self.fresh_round = false;
                    return Step::Yielded(item);
                }
                // an empty round means every later round is empty too
                Step::Complete(()) if self.rounds_left > 0 && !self.fresh_round => {
                    self.rounds_left -= 1;
                    self.fresh_round = true;
                    self.current = Some(self.origin.clone());
                }
                Step::Complete(()) => self.current = None,
            }
        }
        Step::Complete(())
    }

    fn size_class(&self) -> SizeClass {
        match self.current {
            Some(_) => longest(SizeClass::Length, self.origin.size_class()),
            None => SizeClass::Length,
        }
    }

    fn remaining(&self) -> Option<usize> {
        let Some(current) = &self.current else {
            return Some(0);
        };
        let later = self.origin.remaining()?.checked_mul(self.rounds_left)?;
        current.remaining()?.checked_add(later)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::from_iter;

    #[test]
    fn test_cycle_n_rounds() {
        let source = from_iter(1..=3).cycle_n(3);
        assert_eq!(source.remaining(), Some(9));
        assert_eq!(
            source.items().collect::<Vec<_>>(),
            vec![1, 2, 3, 1, 2, 3, 1, 2, 3]
        );
    }

    #[test]
    fn test_cycle_n_zero_rounds() {
        let mut source = cycle_n(from_iter(1..=3), 0);
        assert_eq!(source.remaining(), Some(0));
        assert!(source.pull().is_complete());
    }

    #[test]
    fn test_cycle_n_empty_source_stops_early() {
        let mut source = cycle_n(from_iter(0..0), usize::MAX);
        assert!(source.pull().is_complete());
        assert!(source.current.is_none());
    }

    #[test]
    fn test_cycle_n_restarts_from_construction_position() {
        let mut base = from_iter(0..4);
        base.pull();
        let items: Vec<_> = base.cycle_n(2).items().collect();
        assert_eq!(items, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_cycle_n_remaining_mid_round() {
        let mut source = cycle_n(from_iter(0..2), 2);
        source.pull();
        assert_eq!(source.remaining(), Some(3));
    }
}
