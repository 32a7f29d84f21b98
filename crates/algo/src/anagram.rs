//! Anagram detection by character frequency

use ahash::AHashMap;

/// True iff `a` and `b` contain exactly the same characters with the
/// same frequencies. Comparison is case-sensitive.
pub fn is_anagram(a: &str, b: &str) -> bool {
    // Equal character multisets imply equal byte lengths.
    if a.len() != b.len() {
        return false;
    }
    let mut counts: AHashMap<char, i64> = AHashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in b.chars() {
        match counts.get_mut(&c) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&c);
                }
            }
            None => return false,
        }
    }
    counts.is_empty()
}
