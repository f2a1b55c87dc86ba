//! Binary merge forest
//!
//! Input values enter as depth-0 leaves; each pairing round merges
//! adjacent equal-depth nodes into ordered pairs one level deeper.
//! Every node exclusively owns its children, so the forest is a set of
//! plain recursive values with no sharing.

mod node;

pub use node::{Node, NodeKind};
