//! Chain splitting
//!
//! After the recursive sort orders a level's pairs by maximum value,
//! splitting decomposes them into the main chain and the pending
//! chain. The greater half of every pair after the first is already
//! bounded below by the previous pair's greater half, so it joins
//! `main` with zero comparisons; only the lesser halves need a search.

use crate::tree::{Node, NodeKind};

/// The three chains produced by splitting a sorted pair sequence.
#[derive(Debug)]
pub struct SplitChains {
    /// Nodes known to be in correct relative order.
    pub main: Vec<Node>,
    /// Lesser halves whose position in `main` is not yet known.
    pub pending: Vec<Node>,
    /// Unpaired node carried over from this level's pairing pass.
    pub odd: Option<Node>,
}

/// Split sorted pairs into main and pending chains.
///
/// The first pair seeds `main` with both children, establishing the
/// initial two-element sorted chain. Every later pair appends its
/// greater half to `main` and its lesser half to `pending`. A leaf in
/// the sequence contributes directly to `main`. Performs no
/// comparisons; the ledger is untouched.
pub fn split(sorted_pairs: Vec<Node>, leftover: Option<Node>) -> SplitChains {
    let mut main = Vec::with_capacity(sorted_pairs.len() * 2);
    let mut pending = Vec::new();
    let mut seeded = false;

    for node in sorted_pairs {
        match node.into_kind() {
            NodeKind::Leaf(value) => main.push(Node::leaf(value)),
            NodeKind::Pair(lesser, greater) => {
                if seeded {
                    main.push(*greater);
                    pending.push(*lesser);
                } else {
                    seeded = true;
                    main.push(*lesser);
                    main.push(*greater);
                }
            }
        }
    }

    SplitChains {
        main,
        pending,
        odd: leftover,
    }
}
