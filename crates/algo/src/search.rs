//! Rank selection over distinct values

use smallvec::SmallVec;

use crate::error::AlgoError;
use crate::Result;

/// The k-th largest among the distinct values of `values`, found in a
/// single pass.
///
/// Keeps a descending window of the top `k` distinct values seen so
/// far instead of sorting the whole input, so duplicates never inflate
/// a rank and all-negative inputs need no sentinel minimum.
pub fn kth_largest_distinct<T: Ord + Copy>(values: &[T], k: usize) -> Result<T> {
    if k == 0 {
        return Err(AlgoError::ZeroRank);
    }
    let mut top: SmallVec<[T; 4]> = SmallVec::new();
    for &value in values {
        // The window is descending, so the comparator is reversed.
        match top.binary_search_by(|probe| value.cmp(probe)) {
            Ok(_) => {}
            Err(pos) if pos < k => {
                top.insert(pos, value);
                if top.len() > k {
                    top.pop();
                }
            }
            Err(_) => {}
        }
    }
    // A window that never filled saw every distinct value in the input.
    if top.len() < k {
        return Err(AlgoError::TooFewDistinct {
            required: k,
            found: top.len(),
        });
    }
    Ok(top[k - 1])
}

/// The second largest distinct value.
pub fn second_largest<T: Ord + Copy>(values: &[T]) -> Result<T> {
    kth_largest_distinct(values, 2)
}

/// The third largest distinct value.
pub fn third_largest<T: Ord + Copy>(values: &[T]) -> Result<T> {
    kth_largest_distinct(values, 3)
}
