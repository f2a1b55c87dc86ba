//! Sort observers
//!
//! The engine reports progress through an injected observer instead of
//! conditional printing. Observers receive value-level snapshots of the
//! chains at every phase boundary; they never see nodes and cannot
//! influence the comparison count or the sort result.

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

/// Phase of the sort that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub enum SortPhase {
    /// Adjacent nodes were merged into ordered pairs.
    Pairing,
    /// Sorted pairs were decomposed into main and pending chains.
    Splitting,
    /// A pending entry was binary-inserted into the main chain.
    InsertingPending,
    /// The odd carry-over was binary-inserted into the main chain.
    InsertingOdd,
}

/// Value-level view of the chains at one step of the sort.
///
/// `main`, `pending`, and `odd` carry the maximum leaf value of each
/// node, in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct ChainSnapshot {
    /// Phase that produced this snapshot.
    pub phase: SortPhase,
    /// Merge depth of the level being worked.
    pub depth: u32,
    /// Main chain node maxima.
    pub main: Vec<i64>,
    /// Pending node maxima awaiting insertion.
    pub pending: Vec<i64>,
    /// Odd carry-over maximum, while one is present.
    pub odd: Option<i64>,
}

/// Receives chain snapshots as the sort progresses.
pub trait SortObserver {
    /// Called after each pairing, splitting, and insertion step.
    fn record(&mut self, snapshot: &ChainSnapshot);

    /// Whether the engine should build snapshots at all.
    ///
    /// Defaults to `true`; the null observer opts out so the plain
    /// sorting path never materializes a snapshot.
    fn enabled(&self) -> bool {
        true
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SortObserver for NullObserver {
    fn record(&mut self, _snapshot: &ChainSnapshot) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Observer that emits each snapshot as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SortObserver for TracingObserver {
    fn record(&mut self, snapshot: &ChainSnapshot) {
        tracing::debug!(
            phase = ?snapshot.phase,
            depth = snapshot.depth,
            main = ?snapshot.main,
            pending = ?snapshot.pending,
            odd = ?snapshot.odd,
            "chain state"
        );
    }
}

/// Observer that keeps every snapshot, for tests and visualization.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    snapshots: Vec<ChainSnapshot>,
}

impl CollectingObserver {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots recorded so far, in order.
    pub fn snapshots(&self) -> &[ChainSnapshot] {
        &self.snapshots
    }

    /// Consume the collector, returning the recorded snapshots.
    pub fn into_snapshots(self) -> Vec<ChainSnapshot> {
        self.snapshots
    }
}

impl SortObserver for CollectingObserver {
    fn record(&mut self, snapshot: &ChainSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
