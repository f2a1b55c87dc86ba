//! Binary insertion of the pending chain
//!
//! Consumes the chains a split produced and grows the main chain one
//! pending entry at a time, in Jacobsthal order. A true pending entry
//! searches only up to its partner's current position; the odd
//! carry-over joins the sequence as its final entry and searches the
//! whole chain when its turn comes. Every probe costs one counted
//! comparison.

mod jacobsthal;

pub use jacobsthal::insertion_order;

use crate::chain::SplitChains;
use crate::ledger::ComparisonLedger;
use crate::tree::Node;
use crate::SortError;

/// View handed to the caller after each insertion.
#[derive(Debug)]
pub struct InsertStep<'a> {
    /// Whether the entry just placed was the odd carry-over.
    pub placed_odd: bool,
    /// The main chain after this insertion.
    pub main: &'a [Node],
    /// Pending slots not yet placed (`None` once consumed).
    pub remaining_pending: &'a [Option<Node>],
    /// The odd entry, while it still awaits insertion.
    pub remaining_odd: Option<&'a Node>,
}

/// Insert every pending node and the odd carry-over into the main chain.
///
/// Pending entry `i` originated as the lesser half of the pair whose
/// greater half sits at main index `i + 2` before any insertion; that
/// partner position is its search boundary, shifted up as insertions
/// land below it. `after_insert` fires once per placed entry.
///
/// # Errors
/// [`SortError::PendingIndexOutOfRange`] and
/// [`SortError::SearchBoundOutOfRange`] guard internal invariants;
/// neither occurs for chains produced by a split.
pub fn insert_pending<F>(
    chains: SplitChains,
    ledger: &mut ComparisonLedger,
    mut after_insert: F,
) -> Result<Vec<Node>, SortError>
where
    F: FnMut(InsertStep<'_>),
{
    let SplitChains { mut main, pending, odd } = chains;
    let pending_len = pending.len();
    let mut slots: Vec<Option<Node>> = pending.into_iter().map(Some).collect();
    let mut odd_slot = odd;
    let mut bounds: Vec<usize> = (0..pending_len).map(|i| i + 2).collect();
    let entries = pending_len + usize::from(odd_slot.is_some());

    for idx in insertion_order(entries) {
        let (node, bound, placed_odd) = if idx < pending_len {
            let node = slots
                .get_mut(idx)
                .and_then(|slot| slot.take())
                .ok_or(SortError::PendingIndexOutOfRange {
                    index: idx,
                    len: pending_len,
                })?;
            (node, bounds[idx], false)
        } else {
            let node = odd_slot
                .take()
                .ok_or(SortError::PendingIndexOutOfRange {
                    index: idx,
                    len: pending_len,
                })?;
            let open_bound = main.len();
            (node, open_bound, true)
        };

        if bound > main.len() {
            return Err(SortError::SearchBoundOutOfRange {
                bound,
                len: main.len(),
            });
        }

        let position = upper_bound(&main, bound, node.max_value(), ledger);
        main.insert(position, node);
        for partner in &mut bounds {
            if *partner >= position {
                *partner += 1;
            }
        }

        after_insert(InsertStep {
            placed_odd,
            main: &main,
            remaining_pending: &slots,
            remaining_odd: odd_slot.as_ref(),
        });
    }

    Ok(main)
}

/// Binary search over `main[..bound]` with insert-after-equals
/// semantics: the returned position follows every element ≤ `value`.
fn upper_bound(
    main: &[Node],
    bound: usize,
    value: i64,
    ledger: &mut ComparisonLedger,
) -> usize {
    let (mut lo, mut hi) = (0, bound);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if ledger.less(value, main[mid].max_value()) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
