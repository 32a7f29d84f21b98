//! Shared error type for the fallible algorithms

use thiserror::Error;

/// Why an algorithm rejected its input or could not produce an exact
/// result. Predicates never produce these; they answer `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// A non-empty string was required.
    #[error("input must be a non-empty string")]
    EmptyInput,

    /// Rank-based selection was asked for the 0th value.
    #[error("rank must be at least 1")]
    ZeroRank,

    /// The input holds fewer distinct values than the requested rank.
    #[error("need at least {required} distinct values, found {found}")]
    TooFewDistinct { required: usize, found: usize },

    /// The exact result does not fit the return type.
    #[error("{what}({n}) exceeds the representable range")]
    Overflow { what: &'static str, n: u64 },
}
