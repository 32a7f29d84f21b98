//! Square-multiset comparison

use ahash::AHashMap;

/// True iff `squares` is exactly the element-wise squares of `values`
/// with matching multiplicity, in any order.
pub fn is_squared_multiset(values: &[i64], squares: &[i64]) -> bool {
    if values.len() != squares.len() {
        return false;
    }
    // i128 keys so squaring near the i64 edges cannot wrap.
    let mut counts: AHashMap<i128, i64> = AHashMap::new();
    for &square in squares {
        *counts.entry(i128::from(square)).or_insert(0) += 1;
    }
    for &value in values {
        let squared = i128::from(value) * i128::from(value);
        match counts.get_mut(&squared) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&squared);
                }
            }
            None => return false,
        }
    }
    counts.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_multisets() {
        assert!(is_squared_multiset(&[1, 2, 3], &[9, 1, 4]));
        assert!(is_squared_multiset(&[], &[]));
    }

    #[test]
    fn test_multiplicity_must_match() {
        assert!(is_squared_multiset(&[1, 2, 1], &[1, 1, 4]));
        assert!(!is_squared_multiset(&[1, 2, 1], &[1, 4, 4]));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!is_squared_multiset(&[1, 2], &[1, 4, 9]));
    }

    #[test]
    fn test_wrong_squares() {
        assert!(!is_squared_multiset(&[2, 2], &[4, 5]));
    }

    #[test]
    fn test_negative_values_square_positive() {
        assert!(is_squared_multiset(&[-2, 2], &[4, 4]));
        // Near the i64 edge the square only exists as an i128.
        assert!(!is_squared_multiset(&[i64::MIN], &[i64::MIN]));
    }
}
