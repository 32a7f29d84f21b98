//! Sequence combination helpers

/// All values from both inputs, in ascending order.
pub fn merge_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    merged.sort_unstable();
    merged
}

/// Drops absent values, keeping present ones in order.
pub fn compact<T>(items: Vec<Option<T>>) -> Vec<T> {
    items.into_iter().flatten().collect()
}
