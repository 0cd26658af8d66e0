//! Subsets of a finite ground set.
//!
//! - [`power_set`]: incremental power set enumeration over any ordered labels
//! - [`power_set_masks`]: the same over `{0, ..., n-1}` as [`Subset`] values
//! - [`Subset`]: bitmask subset with a strict-subset-compatible total order
//! - [`is_antichain`]: pairwise incomparability check

mod enumerate;
mod types;

pub use enumerate::{power_set, power_set_masks};
pub use types::{is_antichain, Subset};
