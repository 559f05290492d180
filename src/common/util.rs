//! Auxiliary functions.

use num_bigint::BigInt;
use num_traits::Pow;

/// 10 to the power of `e`.
pub fn pow10(e: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), e)
}
