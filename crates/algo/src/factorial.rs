//! Recursive factorial with checked arithmetic

use crate::error::AlgoError;
use crate::Result;

/// `n!` computed recursively.
///
/// Multiplication is checked: `u128` holds exact factorials through
/// `34!`, after which this reports overflow.
pub fn factorial(n: u64) -> Result<u128> {
    // Everything past 34! overflows, so don't descend for huge inputs.
    if n > 34 {
        return Err(AlgoError::Overflow {
            what: "factorial",
            n,
        });
    }
    match n {
        0 | 1 => Ok(1),
        _ => factorial(n - 1)?
            .checked_mul(u128::from(n))
            .ok_or(AlgoError::Overflow {
                what: "factorial",
                n,
            }),
    }
}
