//! Subset and combination enumeration over random-access collections.
//!
//! These enumerators jump to arbitrary positions, so they work on an
//! [`Indexable`] collection rather than a [`Source`](crate::Source). All three
//! produce selections in ascending position order:
//!
//! - [`subsets`]: the power set, `2^n` selections in binary-counter order
//! - [`subsets_k`]: the `C(n, k)` selections of `k` elements, in lexicographic order
//! - [`subsets_fixed`]: the same, with `k` fixed at compile time and array items
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let all: Vec<Vec<&char>> = subsets(&['a', 'b'][..]).items().collect();
//! assert_eq!(all, vec![vec![], vec![&'a'], vec![&'b'], vec![&'a', &'b']]);
//!
//! let pairs: Vec<[u8; 2]> = subsets_fixed::<_, 2>([1u8, 2, 3]).items().collect();
//! assert_eq!(pairs, vec![[1, 2], [1, 3], [2, 3]]);
//! ```

use std::ops::Range;

mod combinations;
mod fixed;
mod power;

pub use combinations::*;
pub use fixed::*;
pub use power::*;

/// A collection with a known length and random access by position.
///
/// Positions run from `0` to `length() - 1`. `at` returns an owned item: a
/// reference for borrowed slices, a clone for owned collections.
pub trait Indexable {
    /// Type handed out for each position
    type Item;

    /// Number of positions.
    fn length(&self) -> usize;

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.length()`.
    fn at(&self, index: usize) -> Self::Item;
}

impl<'a, T> Indexable for &'a [T] {
    type Item = &'a T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Self::Item {
        &self[index]
    }
}

impl<T> Indexable for Vec<T>
where
    T: Clone,
{
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Self::Item {
        self[index].clone()
    }
}

impl<T, const M: usize> Indexable for [T; M]
where
    T: Clone,
{
    type Item = T;

    fn length(&self) -> usize {
        M
    }

    fn at(&self, index: usize) -> Self::Item {
        self[index].clone()
    }
}

/// A range stands for the positions it covers.
impl Indexable for Range<usize> {
    type Item = usize;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Self::Item {
        self.start + index
    }
}

/// Number of `k`-element selections from `n`, or `None` if it overflows `usize`.
///
/// ```rust
/// use lazyseq::subsets::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(3, 4), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        // exact at every step: acc * (n - k + i) is divisible by i
        acc = acc.checked_mul((n - k + i) as u128)? / i as u128;
    }
    usize::try_from(acc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_yields_references() {
        let data = [10, 20, 30];
        let slice = &data[..];
        assert_eq!(slice.length(), 3);
        assert_eq!(slice.at(1), &20);
    }

    #[test]
    fn test_owned_collections_clone() {
        let names = vec!["x".to_string(), "y".to_string()];
        assert_eq!(names.at(1), "y");
        assert_eq!([1.5f32, 2.5].at(0), 1.5);
        assert_eq!((4usize..9).at(2), 6);
        assert_eq!((4usize..9).length(), 5);
    }

    #[test]
    fn test_binomial_small_values() {
        let row: Vec<_> = (0..=6).map(|k| binomial(6, k)).collect();
        assert_eq!(
            row,
            [1, 6, 15, 20, 15, 6, 1].map(Some).to_vec()
        );
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
    }
}
