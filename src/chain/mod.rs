//! Chain construction
//!
//! One recursion level of the sort: pair adjacent nodes into ordered
//! two-element trees, then split the recursively sorted pairs into a
//! main chain, a pending chain, and an optional odd carry-over.

mod builder;
mod splitter;

pub use builder::{pair_adjacent, Pairing};
pub use splitter::{split, SplitChains};
