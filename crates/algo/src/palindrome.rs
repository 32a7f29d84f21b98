//! Palindrome checks for text and integers

/// Case-insensitive palindrome check with non-alphanumeric characters
/// stripped first. Text that normalizes to nothing is not a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if normalized.is_empty() {
        return false;
    }
    normalized.iter().eq(normalized.iter().rev())
}

/// Digit-reversal palindrome check for integers.
///
/// Negatives and non-zero multiples of ten can never read the same
/// backwards; single digits and zero always do.
pub fn is_palindrome_number(value: i64) -> bool {
    if value < 0 || (value % 10 == 0 && value != 0) {
        return false;
    }
    // Reverse only the low half, so the reversal cannot overflow.
    let (mut rest, mut reversed) = (value, 0i64);
    while rest > reversed {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    rest == reversed || rest == reversed / 10
}
