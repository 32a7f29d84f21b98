//! Classic sequence, string, and number drills as typed free functions
//!
//! This crate provides:
//! - Duplicate detection and order-preserving dedup
//! - Nested-sequence flattening, full and depth-limited
//! - Single-pass rank selection over distinct values
//! - Fibonacci and factorial with checked arithmetic
//! - Palindrome, anagram, and IPv4 predicates
//! - Group-by bucketing and assorted string helpers

pub mod amount;
pub mod anagram;
pub mod counter;
pub mod dedup;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod flatten;
pub mod group_by;
pub mod ipv4;
pub mod merge;
pub mod palindrome;
pub mod search;
pub mod squared;
pub mod words;

pub use amount::Amount;
pub use anagram::is_anagram;
pub use counter::Counter;
pub use dedup::{contains_duplicates, find_duplicates, unique, unique_by};
pub use error::AlgoError;
pub use factorial::factorial;
pub use fibonacci::fibonacci;
pub use flatten::{flatten, flatten_to_depth, Nested};
pub use group_by::group_by;
pub use ipv4::is_valid_ipv4;
pub use merge::{compact, merge_sorted};
pub use palindrome::{is_palindrome, is_palindrome_number};
pub use search::{kth_largest_distinct, second_largest, third_largest};
pub use squared::is_squared_multiset;
pub use words::{count_vowels, longest_word, reverse};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AlgoError>;
