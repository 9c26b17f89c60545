//! Adapters over [`Source`](crate::Source)s.
//!
//! The stateful adapters ([`Product`], [`Distinct`], [`Partition`], [`GroupBy`])
//! carry the interesting algorithms; the rest are thin wrappers for
//! concatenation, strict truncation and fixed repetition.

mod chain;
mod concat;
mod cycle;
mod distinct;
mod group_by;
mod partition;
mod product;
mod take_strict;

pub use chain::*;
pub use concat::*;
pub use cycle::*;
pub use distinct::*;
pub use group_by::*;
pub use partition::*;
pub use product::*;
pub use take_strict::*;
