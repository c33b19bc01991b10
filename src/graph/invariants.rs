//! Debug-only invariant checks.
//!
//! Algorithms call these on their results so that debug and test builds catch
//! a broken postcondition at the point it is produced. Release builds compile
//! them away.

/// Debug-asserts an invariant with a message.
#[inline(always)]
pub(crate) fn invariant(condition: bool, message: &str) {
    debug_assert!(condition, "graph invariant violated: {}", message);
}

/// Checks that `groups` partitions `0..node_count`: every node appears in
/// exactly one group.
pub(crate) fn is_partition(groups: &[Vec<usize>], node_count: usize) -> bool {
    let mut seen = vec![false; node_count];
    for &node in groups.iter().flatten() {
        if node >= node_count || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    seen.into_iter().all(|s| s)
}

/// Checks that `order` is a permutation of `0..node_count`.
pub(crate) fn is_permutation(order: &[usize], node_count: usize) -> bool {
    order.len() == node_count && is_partition(&[order.to_vec()], node_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_detects_duplicates_and_gaps() {
        assert!(is_partition(&[vec![0, 2], vec![1]], 3));
        assert!(!is_partition(&[vec![0, 1], vec![1]], 3));
        assert!(!is_partition(&[vec![0], vec![1]], 3));
        assert!(!is_partition(&[vec![0, 3]], 3));
    }

    #[test]
    fn permutation_requires_every_node_once() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(is_permutation(&[], 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "graph invariant violated")]
    fn invariant_panics_in_debug() {
        invariant(false, "always fails");
    }
}
