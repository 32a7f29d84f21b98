//! Bucketing by a caller-supplied key

use std::collections::HashMap;
use std::hash::Hash;

/// Buckets `items` by `key`, preserving encounter order within each
/// group. Key order of the resulting map is unspecified.
///
/// # Example
/// ```
/// let groups = algo::group_by(vec!["apple", "avocado", "beet"], |s| s.as_bytes()[0]);
/// assert_eq!(groups[&b'a'], vec!["apple", "avocado"]);
/// assert_eq!(groups[&b'b'], vec!["beet"]);
/// ```
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_field() {
        let residents = vec![
            ("Hyderabad", "Arya"),
            ("Delhi", "Fatima"),
            ("Hyderabad", "Vivek"),
            ("Delhi", "Rohan"),
        ];
        let by_city = group_by(residents, |r| r.0);
        assert_eq!(by_city.len(), 2);
        assert_eq!(
            by_city[&"Hyderabad"],
            vec![("Hyderabad", "Arya"), ("Hyderabad", "Vivek")]
        );
        assert_eq!(
            by_city[&"Delhi"],
            vec![("Delhi", "Fatima"), ("Delhi", "Rohan")]
        );
    }

    #[test]
    fn test_encounter_order_within_groups() {
        let by_parity = group_by(vec![5, 2, 9, 4, 1], |n| n % 2);
        assert_eq!(by_parity[&1], vec![5, 9, 1]);
        assert_eq!(by_parity[&0], vec![2, 4]);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by(Vec::<i32>::new(), |n| *n);
        assert!(groups.is_empty());
    }
}
