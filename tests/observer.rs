//! Observer integration: snapshots must describe the sort without
//! changing it.

use fordjohnson::{sort, CollectingObserver, SortPhase, Sorter};

#[test]
fn observers_do_not_change_the_result() {
    let input = [14, -3, 99, 0, 7, -80, 23, 5, 61, 42];

    let plain = sort(&input).expect("sort succeeds");

    let mut sorter = Sorter::with_observer(CollectingObserver::new());
    let observed = sorter.sort(&input).expect("sort succeeds");

    assert_eq!(plain.sorted, observed.sorted);
    assert_eq!(plain.comparisons, observed.comparisons);
    assert!(
        !sorter.into_observer().into_snapshots().is_empty(),
        "collector saw no snapshots"
    );
}

#[test]
fn snapshots_walk_the_phases_in_order() {
    let mut sorter = Sorter::with_observer(CollectingObserver::new());
    sorter.sort(&[5, 2, 9, 1, 3]).expect("sort succeeds");

    let snapshots = sorter.into_observer().into_snapshots();
    let phases: Vec<(SortPhase, u32)> = snapshots.iter().map(|s| (s.phase, s.depth)).collect();
    assert_eq!(
        phases,
        vec![
            (SortPhase::Pairing, 0),
            (SortPhase::Pairing, 1),
            (SortPhase::Splitting, 1),
            (SortPhase::Splitting, 0),
            (SortPhase::InsertingOdd, 0),
            (SortPhase::InsertingPending, 0),
        ]
    );

    // The odd element takes its Jacobsthal turn ahead of the last pending
    // entry, which is still waiting when the odd lands.
    let odd_turn = snapshots
        .iter()
        .find(|s| s.phase == SortPhase::InsertingOdd)
        .expect("odd insertion snapshot");
    assert_eq!(odd_turn.main, vec![2, 3, 5, 9]);
    assert_eq!(odd_turn.pending, vec![1]);
    assert_eq!(odd_turn.odd, None);

    let last = snapshots.last().expect("at least one snapshot");
    assert_eq!(last.main, vec![1, 2, 3, 5, 9]);
    assert!(last.pending.is_empty());
    assert_eq!(last.odd, None);
}

#[test]
fn pairing_snapshot_reports_the_leftover() {
    let mut sorter = Sorter::with_observer(CollectingObserver::new());
    sorter.sort(&[5, 2, 9, 1, 3]).expect("sort succeeds");

    let snapshots = sorter.into_observer().into_snapshots();
    let first = &snapshots[0];
    assert_eq!(first.phase, SortPhase::Pairing);
    assert_eq!(first.depth, 0);
    assert_eq!(first.main, vec![5, 9]);
    assert!(first.pending.is_empty());
    assert_eq!(first.odd, Some(3));
}

#[test]
fn splitting_snapshot_separates_the_chains() {
    let mut sorter = Sorter::with_observer(CollectingObserver::new());
    sorter.sort(&[5, 2, 9, 1, 3]).expect("sort succeeds");

    let snapshots = sorter.into_observer().into_snapshots();
    let split = snapshots
        .iter()
        .find(|s| s.phase == SortPhase::Splitting && s.depth == 0)
        .expect("depth-0 splitting snapshot");

    assert_eq!(split.main, vec![2, 5, 9]);
    assert_eq!(split.pending, vec![1]);
    assert_eq!(split.odd, Some(3));
}
