//! Merge tree node representation
//!
//! A node is either one original input value or an ordered pair of two
//! equal-depth subtrees. The maximum leaf value is cached on
//! construction so ordering and binary insertion never re-walk a
//! subtree.

use std::fmt;

use crate::ledger::ComparisonLedger;
use crate::SortError;

/// A value in the binary merge forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    depth: u32,
    max: i64,
}

/// The two shapes a [`Node`] can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A single original input value.
    Leaf(i64),
    /// An ordered (lesser, greater) pair of equal-depth subtrees.
    Pair(Box<Node>, Box<Node>),
}

impl Node {
    /// Wrap one input value at merge depth 0.
    pub fn leaf(value: i64) -> Self {
        Self {
            kind: NodeKind::Leaf(value),
            depth: 0,
            max: value,
        }
    }

    /// Merge two equal-depth nodes into a pair one level deeper.
    ///
    /// Children keep their argument order; call [`order_children`] on
    /// the result to establish the lesser/greater invariant.
    ///
    /// [`order_children`]: Node::order_children
    pub fn merge(a: Node, b: Node) -> Result<Node, SortError> {
        if a.depth != b.depth {
            return Err(SortError::DepthMismatch {
                left: a.depth,
                right: b.depth,
            });
        }
        let depth = a.depth + 1;
        let max = a.max.max(b.max);
        Ok(Self {
            kind: NodeKind::Pair(Box::new(a), Box::new(b)),
            depth,
            max,
        })
    }

    /// Merge depth: how many pairing rounds this node has been through.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Greatest leaf value in this subtree, cached at construction.
    #[inline]
    pub fn max_value(&self) -> i64 {
        self.max
    }

    /// Whether this node holds a single original value.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Order the children so the lesser maximum comes first.
    ///
    /// Costs exactly one counted comparison on a pair. A leaf performs
    /// no comparison and no swap.
    pub fn order_children(&mut self, ledger: &mut ComparisonLedger) {
        if let NodeKind::Pair(first, second) = &mut self.kind {
            if ledger.less(second.max, first.max) {
                std::mem::swap(first, second);
            }
        }
    }

    /// Append every leaf value in left-to-right order.
    pub fn collect_values(&self, out: &mut Vec<i64>) {
        match &self.kind {
            NodeKind::Leaf(value) => out.push(*value),
            NodeKind::Pair(first, second) => {
                first.collect_values(out);
                second.collect_values(out);
            }
        }
    }

    pub(crate) fn into_kind(self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Leaf(value) => write!(f, "{value}"),
            NodeKind::Pair(first, second) => write!(f, "({first} {second})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_basics() {
        let node = Node::leaf(7);
        assert!(node.is_leaf());
        assert_eq!(node.depth(), 0);
        assert_eq!(node.max_value(), 7);
    }

    #[test]
    fn merge_tracks_depth_and_max() {
        let pair = Node::merge(Node::leaf(4), Node::leaf(9)).unwrap();
        assert!(!pair.is_leaf());
        assert_eq!(pair.depth(), 1);
        assert_eq!(pair.max_value(), 9);

        let deeper = Node::merge(pair.clone(), pair).unwrap();
        assert_eq!(deeper.depth(), 2);
        assert_eq!(deeper.max_value(), 9);
    }

    #[test]
    fn merge_rejects_unequal_depths() {
        let leaf = Node::leaf(1);
        let pair = Node::merge(Node::leaf(2), Node::leaf(3)).unwrap();
        let err = Node::merge(leaf, pair).unwrap_err();
        assert!(matches!(
            err,
            SortError::DepthMismatch { left: 0, right: 1 }
        ));
    }

    #[test]
    fn order_children_swaps_once_and_counts() {
        let mut ledger = ComparisonLedger::new();
        let mut pair = Node::merge(Node::leaf(9), Node::leaf(4)).unwrap();
        pair.order_children(&mut ledger);
        assert_eq!(ledger.total(), 1);

        let mut values = Vec::new();
        pair.collect_values(&mut values);
        assert_eq!(values, vec![4, 9]);
    }

    #[test]
    fn order_children_keeps_ordered_pair() {
        let mut ledger = ComparisonLedger::new();
        let mut pair = Node::merge(Node::leaf(4), Node::leaf(9)).unwrap();
        pair.order_children(&mut ledger);
        assert_eq!(ledger.total(), 1);

        let mut values = Vec::new();
        pair.collect_values(&mut values);
        assert_eq!(values, vec![4, 9]);
    }

    #[test]
    fn order_children_on_leaf_is_free() {
        let mut ledger = ComparisonLedger::new();
        let mut leaf = Node::leaf(3);
        leaf.order_children(&mut ledger);
        assert_eq!(ledger.total(), 0);
    }

    #[test]
    fn display_nests_pairs() {
        let pair = Node::merge(Node::leaf(2), Node::leaf(5)).unwrap();
        let deeper = Node::merge(pair, Node::merge(Node::leaf(1), Node::leaf(8)).unwrap())
            .unwrap();
        assert_eq!(deeper.to_string(), "((2 5) (1 8))");
    }
}
