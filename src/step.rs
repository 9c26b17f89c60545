/// Result of a single pull: either the next element or exhaustion.
///
/// `Step` is what [`Source::pull`](crate::Source::pull) returns. The completion
/// payload defaults to `()` because a plain source has nothing to report when
/// it runs dry; the second parameter stays generic so a step can carry other
/// data through the same helpers.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let next: Step<i32> = Step::Yielded(42);
/// let done: Step<i32> = Step::Complete(());
///
/// assert_eq!(next.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The source produced an element and can be pulled again.
    Yielded(Y),
    /// The source is exhausted.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding any completion payload.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::<_, ()>::Yielded(3).yielded_value(), Some(3));
    /// assert_eq!(Step::<i32>::Complete(()).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts from `Step<Y, D>` to `Option<D>`, discarding any yielded element.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the yielded element, leaving completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the completion payload, leaving a yielded element untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Complete`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// Step::<i32>::Complete(()).unwrap_yielded();
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion payload.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
