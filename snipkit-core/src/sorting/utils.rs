//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// `indices[k]` names the position, in the original slice, of the element
/// that should end up at position `k`. `indices` must be a permutation of
/// `0..items.len()`. Elements are moved by swapping along the permutation's
/// cycles, so `T` needs no `Clone`.
pub fn reorder_by_indices<T>(items: &mut [T], mut indices: Vec<usize>) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    for start in 0..indices.len() {
        if indices[start] == start {
            continue;
        }

        // The element displaced from `start` rides along the cycle until
        // the slot that wants it is reached.
        let mut slot = start;
        loop {
            let source = indices[slot];
            debug_assert!(source < items.len(), "Index out of bounds");
            indices[slot] = slot;
            if source == start {
                break;
            }
            items.swap(slot, source);
            slot = source;
        }
    }
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}
