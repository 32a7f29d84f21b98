//! Fibonacci sequence generation with checked arithmetic

use crate::error::AlgoError;
use crate::Result;

/// The first `n` fibonacci numbers, starting `0, 1`.
///
/// Zero terms is an empty sequence. Sums are checked: the u64 sequence
/// is exact through 94 terms, after which this reports overflow rather
/// than losing precision.
///
/// # Example
/// ```
/// assert_eq!(algo::fibonacci(5).unwrap(), vec![0, 1, 1, 2, 3]);
/// ```
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    let mut sequence: Vec<u64> = Vec::with_capacity(n);
    for i in 0..n {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => sequence[i - 1]
                .checked_add(sequence[i - 2])
                .ok_or(AlgoError::Overflow {
                    what: "fibonacci",
                    n: i as u64,
                })?,
        };
        sequence.push(next);
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_terms() {
        assert_eq!(fibonacci(5), Ok(vec![0, 1, 1, 2, 3]));
        assert_eq!(fibonacci(10), Ok(vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
    }

    #[test]
    fn test_degenerate_lengths() {
        assert_eq!(fibonacci(0), Ok(vec![]));
        assert_eq!(fibonacci(1), Ok(vec![0]));
        assert_eq!(fibonacci(2), Ok(vec![0, 1]));
    }

    #[test]
    fn test_longest_exact_sequence() {
        let sequence = fibonacci(94).unwrap();
        assert_eq!(sequence.len(), 94);
        assert_eq!(sequence.last(), Some(&12_200_160_415_121_876_738));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            fibonacci(95),
            Err(AlgoError::Overflow {
                what: "fibonacci",
                n: 94
            })
        );
    }
}
