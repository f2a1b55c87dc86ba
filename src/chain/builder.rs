//! Pairing pass
//!
//! Scans a level of equal-depth nodes left to right, merging each
//! adjacent pair into an ordered node one level deeper. A trailing
//! unpaired node is carried over unmerged and becomes this level's odd
//! element after splitting.

use crate::ledger::ComparisonLedger;
use crate::tree::Node;
use crate::SortError;

/// Outcome of one pairing pass.
#[derive(Debug)]
pub struct Pairing {
    /// Merged nodes, one level deeper than the input.
    pub paired: Vec<Node>,
    /// Trailing node left unmerged when the input length was odd.
    pub leftover: Option<Node>,
}

/// Merge adjacent equal-depth nodes left to right.
///
/// Each merged pair is ordered by maximum leaf value, costing exactly
/// one counted comparison. Sequences of length 0 or 1 come back
/// unchanged with no comparison performed (recursion base case).
/// Pairing is positional: element `i` merges with element `i + 1`,
/// never anything further away.
pub fn pair_adjacent(
    nodes: Vec<Node>,
    ledger: &mut ComparisonLedger,
) -> Result<Pairing, SortError> {
    if nodes.len() <= 1 {
        return Ok(Pairing {
            paired: nodes,
            leftover: None,
        });
    }

    let mut paired = Vec::with_capacity(nodes.len() / 2);
    let mut leftover = None;
    let mut iter = nodes.into_iter();
    while let Some(first) = iter.next() {
        match iter.next() {
            Some(second) => {
                let mut merged = Node::merge(first, second)?;
                merged.order_children(ledger);
                paired.push(merged);
            }
            None => leftover = Some(first),
        }
    }

    Ok(Pairing { paired, leftover })
}
