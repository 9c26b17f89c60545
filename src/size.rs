//! Size classes and the two ways they combine.
//!
//! A [`SizeClass`] says what can be known about how many elements a source
//! produces, without saying how many. Composed sources derive their class from
//! their inputs with one of two merges:
//!
//! - [`longest`] when every input is fully consumed (concatenation, product)
//! - [`shortest`] when the most constrained input bounds the result (truncation)

/// What a source can tell about its own size before being consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Size depends on the data and is only known after consumption.
    Unknown,
    /// A finite, exactly known number of elements.
    Length,
    /// A finite number of elements derived from a multi-dimensional shape.
    Shape,
    /// Never exhausts.
    Infinite,
}

impl SizeClass {
    /// Returns `true` when the number of elements is known without consuming.
    #[inline]
    pub const fn is_sized(self) -> bool {
        matches!(self, SizeClass::Length | SizeClass::Shape)
    }
}

/// Size class of a composition that consumes all of `a` and all of `b`.
///
/// ```rust
/// use lazyseq::{SizeClass, longest};
///
/// assert_eq!(longest(SizeClass::Length, SizeClass::Infinite), SizeClass::Infinite);
/// assert_eq!(longest(SizeClass::Length, SizeClass::Unknown), SizeClass::Unknown);
/// assert_eq!(longest(SizeClass::Shape, SizeClass::Length), SizeClass::Length);
/// ```
pub const fn longest(a: SizeClass, b: SizeClass) -> SizeClass {
    use SizeClass::*;
    match (a, b) {
        (Infinite, _) | (_, Infinite) => Infinite,
        (Unknown, _) | (_, Unknown) => Unknown,
        (Shape, Shape) => Shape,
        _ => Length,
    }
}

/// Size class of a composition bounded by whichever of `a` and `b` ends first.
///
/// ```rust
/// use lazyseq::{SizeClass, shortest};
///
/// assert_eq!(shortest(SizeClass::Length, SizeClass::Infinite), SizeClass::Length);
/// assert_eq!(shortest(SizeClass::Infinite, SizeClass::Unknown), SizeClass::Unknown);
/// ```
pub const fn shortest(a: SizeClass, b: SizeClass) -> SizeClass {
    use SizeClass::*;
    match (a, b) {
        (Infinite, other) | (other, Infinite) => other,
        (Unknown, _) | (_, Unknown) => Unknown,
        (Shape, Shape) => Shape,
        _ => Length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SizeClass::*;

    const ALL: [SizeClass; 4] = [Unknown, Length, Shape, Infinite];

    #[test]
    fn test_merges_are_commutative() {
        for a in ALL {
            for b in ALL {
                assert_eq!(longest(a, b), longest(b, a), "longest({a:?}, {b:?})");
                assert_eq!(shortest(a, b), shortest(b, a), "shortest({a:?}, {b:?})");
            }
        }
    }

    #[test]
    fn test_merges_are_associative() {
        for a in ALL {
            for b in ALL {
                for c in ALL {
                    assert_eq!(longest(longest(a, b), c), longest(a, longest(b, c)));
                    assert_eq!(shortest(shortest(a, b), c), shortest(a, shortest(b, c)));
                }
            }
        }
    }

    #[test]
    fn test_infinite_absorbs_or_yields() {
        for a in ALL {
            assert_eq!(longest(a, Infinite), Infinite);
            assert_eq!(shortest(a, Infinite), a);
        }
    }

    #[test]
    fn test_shape_degrades_to_length() {
        assert_eq!(longest(Shape, Shape), Shape);
        assert_eq!(shortest(Shape, Length), Length);
        assert!(Shape.is_sized());
        assert!(!Unknown.is_sized());
    }
}
