//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for the pull protocol, every constructor
//! and the size-class helpers.

// Core types
pub use crate::{SeqError, SizeClass, Source, Step};

// Building sources
pub use crate::build::{from_fn, repeatedly};
pub use crate::iter::from_iter;

// Source adapters
pub use crate::combinators::{
    chain, chain_all, cycle_n, distinct, group_by, partition, partition_step, product, take_strict,
};

// Enumerators over indexable collections
pub use crate::subsets::{Indexable, subsets, subsets_fixed, subsets_k};

// Size classes
pub use crate::size::{longest, shortest};
