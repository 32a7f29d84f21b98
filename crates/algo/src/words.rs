//! Word and character-level string helpers

use crate::error::AlgoError;
use crate::Result;

/// The first token of maximal length, with tokens separated by single
/// spaces. Length is counted in `char`s, not bytes. Consecutive
/// spaces produce empty tokens, which can never win over a real word.
pub fn longest_word(sentence: &str) -> Result<&str> {
    if sentence.is_empty() {
        return Err(AlgoError::EmptyInput);
    }
    let (best, _) = sentence.split(' ').fold(("", 0), |(best, best_len), word| {
        let len = word.chars().count();
        if len > best_len {
            (word, len)
        } else {
            (best, best_len)
        }
    });
    Ok(best)
}

/// Number of ASCII vowels, either case.
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Characters in reverse order. Operates on `char`s, not grapheme
/// clusters.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
