//! Jacobsthal insertion order
//!
//! Pending elements are inserted in runs bounded by successive
//! Jacobsthal numbers (J(k) = J(k-1) + 2·J(k-2): 1, 3, 5, 11, 21, ...),
//! each run emitted from its high end down. Working a run highest-first
//! keeps every binary search inside a window of 2^m - 1 candidate
//! positions, the shape a search of m probes covers exactly.

/// Insertion order for `n` pending elements.
///
/// Returns a permutation of `[0, n)` ordered by the descending-block
/// Jacobsthal rule. The first prefixes are `[0]`, `[1, 0]`,
/// `[1, 0, 2]`, `[1, 0, 3, 2]`, and for ten entries
/// `[1, 0, 3, 2, 9, 8, 7, 6, 5, 4]`.
pub fn insertion_order(n: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(n);
    if n == 0 {
        return order;
    }

    // consecutive Jacobsthal numbers, starting from J(2) = 1, J(3) = 3
    let (mut prev, mut curr) = (1usize, 3usize);
    while order.len() < n {
        let top = (curr - 1).min(n);
        for slot in (prev..=top).rev() {
            order.push(slot - 1);
        }
        let next = curr + 2 * prev;
        prev = curr;
        curr = next;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, &[] ; "empty")]
    #[test_case(1, &[0] ; "single entry skips the machinery")]
    #[test_case(2, &[1, 0] ; "first full block")]
    #[test_case(3, &[1, 0, 2] ; "second block clipped")]
    #[test_case(4, &[1, 0, 3, 2] ; "second block full")]
    #[test_case(5, &[1, 0, 3, 2, 4] ; "third block clipped")]
    #[test_case(10, &[1, 0, 3, 2, 9, 8, 7, 6, 5, 4] ; "third block full")]
    fn known_prefixes(n: usize, expected: &[usize]) {
        assert_eq!(insertion_order(n), expected);
    }

    #[test]
    fn order_is_a_permutation() {
        for n in 0..=64 {
            let order = insertion_order(n);
            assert_eq!(order.len(), n, "length for n = {n}");

            let mut seen = vec![false; n];
            for idx in order {
                assert!(idx < n, "index {idx} out of range for n = {n}");
                assert!(!seen[idx], "index {idx} emitted twice for n = {n}");
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn blocks_open_at_jacobsthal_predecessors() {
        // each block opens at index J(k) - 2: 1, 3, 9, 19 for n = 21
        let order = insertion_order(21);
        assert_eq!(order[0], 1);
        assert_eq!(order[2], 3);
        assert_eq!(order[4], 9);
        assert_eq!(order[10], 19);
        assert_eq!(order[20], 20, "clipped final block emits the tail index");
    }
}
