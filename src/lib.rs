//! # Lazyseq: Composable Lazy Sequence Combinators
//!
//! Pull-based sequences that do nothing until asked for their next element,
//! plus the adapters over them that need real bookkeeping to get right.
//!
//! ## Core Traits
//!
//! - **[`Source`]**: produces the next element on each [`pull`](Source::pull),
//!   or reports exhaustion with [`Step::Complete`]
//! - **[`Indexable`](subsets::Indexable)**: random access by position, for the
//!   subset enumerators
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let runs: Vec<Vec<i32>> = from_iter([1, 1, 2, 3, 3, 3])
//!     .group_by(|x| *x)
//!     .items()
//!     .collect();
//! assert_eq!(runs, vec![vec![1, 1], vec![2], vec![3, 3, 3]]);
//!
//! let grid: Vec<(i32, char)> = product((from_iter(0..2), from_iter(['a', 'b'])))
//!     .items()
//!     .collect();
//! assert_eq!(grid, vec![(0, 'a'), (1, 'a'), (0, 'b'), (1, 'b')]);
//! ```
//!
//! ## Common Functions
//!
//! **Adapters over sources:**
//! - [`product(sources)`](combinators::product) - Cartesian product, first source fastest
//! - [`distinct(source)`](combinators::distinct) - First occurrence of every value
//! - [`partition::<N>(source)`](combinators::partition) - Windows of `N`, with
//!   [`partition_step`](combinators::partition_step) for overlap or skip
//! - [`group_by(key, source)`](combinators::group_by) - Maximal runs sharing a key
//!
//! **Enumerators over collections:**
//! - [`subsets(c)`](subsets::subsets) - The power set
//! - [`subsets_k(c, k)`](subsets::subsets_k) - All `k`-element selections
//! - [`subsets_fixed::<_, K>(c)`](subsets::subsets_fixed) - The same as `[T; K]` arrays
//!
//! **Bridges:**
//! - [`from_iter(iter)`](iter::from_iter) - Any iterator as a source
//! - [`Source::items`] - Any source as an iterator

pub mod build;
pub mod combinators;
mod error;
pub mod iter;
pub mod prelude;
pub mod size;
mod source;
mod step;
pub mod subsets;

pub use error::SeqError;
pub use size::{SizeClass, longest, shortest};
pub use source::Source;
pub use step::Step;
