//! Duplicate detection and order-preserving dedup

use std::hash::Hash;

use ahash::AHashSet;

/// True iff any value occurs more than once.
pub fn contains_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = AHashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(item))
}

/// Every value that occurs more than once, reported once each in
/// first-seen order (the order in which values were discovered to
/// repeat).
///
/// # Example
/// ```
/// assert_eq!(algo::find_duplicates(&[1, 2, 3, 1, 1, 1]), vec![1]);
/// ```
pub fn find_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = AHashSet::with_capacity(items.len());
    let mut reported = AHashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            duplicates.push(item.clone());
        }
    }
    duplicates
}

/// The first occurrence of each value, order preserved.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = AHashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// The first item for each distinct key, order preserved. The key
/// closure stands in for structural comparison of whole records.
pub fn unique_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = AHashSet::new();
    let mut kept = Vec::new();
    for item in items {
        if seen.insert(key(&item)) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_duplicates() {
        assert!(contains_duplicates(&[1, 2, 3, 1]));
        assert!(!contains_duplicates(&[1, 2, 3]));
        assert!(!contains_duplicates::<i32>(&[]));
    }

    #[test]
    fn test_find_duplicates_reports_each_value_once() {
        assert_eq!(find_duplicates(&[1, 2, 3, 1, 1, 1]), vec![1]);
    }

    #[test]
    fn test_find_duplicates_first_seen_order() {
        // 2 is discovered to repeat before 1 is.
        assert_eq!(find_duplicates(&[1, 2, 2, 3, 1]), vec![2, 1]);
    }

    #[test]
    fn test_find_duplicates_none() {
        assert_eq!(find_duplicates(&["a", "b", "c"]), Vec::<&str>::new());
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_by_structural_key() {
        #[derive(Debug, PartialEq)]
        struct Point {
            x: i32,
            y: i32,
        }
        let points = vec![
            Point { x: 1, y: 2 },
            Point { x: 3, y: 4 },
            Point { x: 1, y: 2 },
        ];
        let distinct = unique_by(points, |p| (p.x, p.y));
        assert_eq!(distinct, vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
    }
}
