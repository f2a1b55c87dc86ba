//! # Merge-Insertion Sorting Engine
//!
//! Implementation of the Ford–Johnson merge-insertion sort: the
//! comparison-minimizing sort that pairs elements into a binary merge
//! forest, recursively orders the pairs by their maxima, and re-inserts
//! the pending lesser halves in Jacobsthal order.
//!
//! ## Algorithm
//!
//! 1. **Pairing**: merge adjacent equal-depth nodes, ordering each pair
//!    by maximum leaf value (one comparison per pair)
//! 2. **Recursion**: sort the pairs themselves the same way
//! 3. **Splitting**: decompose the sorted pairs into a main chain and a
//!    pending chain of lesser halves
//! 4. **Insertion**: binary-insert pending entries in Jacobsthal order,
//!    each search bounded by its partner's position in the main chain
//!
//! The comparison count never exceeds F(n) = Σ ⌈log₂(3k/4)⌉, which
//! equals the information-theoretic optimum ⌈log₂(n!)⌉ for n ≤ 11.
//!
//! ## Usage Example
//!
//! ```
//! use fordjohnson::{sort, worst_case_comparisons};
//!
//! let outcome = sort(&[9, 4, 7, 1])?;
//! assert_eq!(outcome.sorted, vec![1, 4, 7, 9]);
//! assert!(outcome.comparisons <= worst_case_comparisons(4));
//! # Ok::<(), fordjohnson::SortError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod chain; // pairing and splitting passes
pub mod exchange; // rate-table date lookup utility
pub mod insertion; // Jacobsthal-ordered binary insertion
pub mod ledger; // comparison accounting and bounds
pub mod rpn; // reverse-Polish calculator utility
pub mod trace; // injected sort observers
pub mod tree; // binary merge forest

// Re-exports for convenience
pub use insertion::insertion_order;
pub use ledger::{information_bound, worst_case_comparisons, ComparisonLedger};
pub use trace::{
    ChainSnapshot, CollectingObserver, NullObserver, SortObserver, SortPhase, TracingObserver,
};
pub use tree::Node;

use thiserror::Error;

use crate::chain::{pair_adjacent, split, Pairing};
use crate::insertion::insert_pending;

/// Errors surfaced by the sorting engine.
///
/// Every variant marks an internal invariant violation: correct driver
/// logic never produces one, and the test suite treats an occurrence as
/// a bug. There are no recoverable errors in the core; input validation
/// belongs to callers.
#[derive(Error, Debug)]
pub enum SortError {
    /// Pairing was attempted on nodes of unequal merge depth.
    #[error("cannot merge nodes of unequal depth ({left} vs {right})")]
    DepthMismatch {
        /// Depth of the left operand.
        left: u32,
        /// Depth of the right operand.
        right: u32,
    },

    /// A pending entry was referenced outside the pending chain.
    #[error("pending index {index} out of range for {len} entries")]
    PendingIndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of pending entries.
        len: usize,
    },

    /// A search boundary exceeded the main chain length.
    #[error("search bound {bound} exceeds main chain length {len}")]
    SearchBoundOutOfRange {
        /// Boundary that was requested.
        bound: usize,
        /// Current main chain length.
        len: usize,
    },
}

/// Result of a completed sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The input values in non-decreasing order.
    pub sorted: Vec<i64>,

    /// Exact number of value comparisons performed.
    pub comparisons: u64,
}

impl SortOutcome {
    /// Whether the count respects the merge-insertion worst case for
    /// this input size.
    pub fn within_bound(&self) -> bool {
        self.comparisons <= worst_case_comparisons(self.sorted.len())
    }
}

/// Merge-insertion sort driver.
///
/// Owns the injected observer and the recursion; a fresh ledger is
/// created per [`sort`](Sorter::sort) call, so one driver can sort many
/// inputs.
#[derive(Debug)]
pub struct Sorter<O: SortObserver = NullObserver> {
    observer: O,
}

impl Sorter<NullObserver> {
    /// Driver with the null observer.
    pub fn new() -> Self {
        Self {
            observer: NullObserver,
        }
    }
}

impl Default for Sorter<NullObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: SortObserver> Sorter<O> {
    /// Driver reporting each phase to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Consume the driver, returning the observer for inspection.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Sort `values`, returning the ordered sequence and the exact
    /// comparison count.
    ///
    /// Empty and singleton inputs come back unchanged with zero
    /// comparisons. Duplicates are permitted; the sort is not stable.
    pub fn sort(&mut self, values: &[i64]) -> Result<SortOutcome, SortError> {
        if values.len() <= 1 {
            return Ok(SortOutcome {
                sorted: values.to_vec(),
                comparisons: 0,
            });
        }

        let mut ledger = ComparisonLedger::new();
        let leaves: Vec<Node> = values.iter().copied().map(Node::leaf).collect();
        let chain = self.sort_level(leaves, &mut ledger)?;

        let mut sorted = Vec::with_capacity(values.len());
        for node in &chain {
            node.collect_values(&mut sorted);
        }

        Ok(SortOutcome {
            sorted,
            comparisons: ledger.total(),
        })
    }

    /// One recursion level: pair, recurse on the pairs, split, insert.
    fn sort_level(
        &mut self,
        nodes: Vec<Node>,
        ledger: &mut ComparisonLedger,
    ) -> Result<Vec<Node>, SortError> {
        if nodes.len() <= 1 {
            return Ok(nodes);
        }
        let depth = nodes.first().map_or(0, Node::depth);

        let Pairing { paired, leftover } = pair_adjacent(nodes, ledger)?;
        if self.observer.enabled() {
            self.observer.record(&ChainSnapshot {
                phase: SortPhase::Pairing,
                depth,
                main: maxes(&paired),
                pending: Vec::new(),
                odd: leftover.as_ref().map(Node::max_value),
            });
        }

        let sorted_pairs = self.sort_level(paired, ledger)?;

        let chains = split(sorted_pairs, leftover);
        if self.observer.enabled() {
            self.observer.record(&ChainSnapshot {
                phase: SortPhase::Splitting,
                depth,
                main: maxes(&chains.main),
                pending: maxes(&chains.pending),
                odd: chains.odd.as_ref().map(Node::max_value),
            });
        }

        let observer = &mut self.observer;
        let enabled = observer.enabled();
        insert_pending(chains, ledger, |step| {
            if enabled {
                observer.record(&ChainSnapshot {
                    phase: if step.placed_odd {
                        SortPhase::InsertingOdd
                    } else {
                        SortPhase::InsertingPending
                    },
                    depth,
                    main: maxes(step.main),
                    pending: step
                        .remaining_pending
                        .iter()
                        .flatten()
                        .map(Node::max_value)
                        .collect(),
                    odd: step.remaining_odd.map(Node::max_value),
                });
            }
        })
    }
}

/// Sort with the null observer.
///
/// Convenience wrapper over [`Sorter::new`] for the common case.
pub fn sort(values: &[i64]) -> Result<SortOutcome, SortError> {
    Sorter::new().sort(values)
}

fn maxes(nodes: &[Node]) -> Vec<i64> {
    nodes.iter().map(Node::max_value).collect()
}
