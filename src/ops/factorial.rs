//! Factorial.

use num_bigint::BigInt;
use num_traits::{One, Signed};
use tracing::debug;

use crate::defs::Error;
use crate::num::Number;
use crate::ops::product::RangeProduct;
use crate::rational::Rational;

/// Computes the factorial of `n` using the default [`RangeProduct`].
///
/// ## Errors
///
///  - FactorialDomain: `n` is negative, or it is not an integer.
///
/// ## Examples
///
/// ```
/// use rational_core::factorial;
/// use num_bigint::BigInt;
///
/// assert_eq!(factorial(20).unwrap(), BigInt::from(2432902008176640000u64));
/// ```
pub fn factorial<T: Into<Number>>(n: T) -> Result<BigInt, Error> {
    factorial_with(n, &RangeProduct::new())
}

/// Computes the factorial of `n` using the range product `rp`.
/// A float, a decimal, or a rational is accepted if its value is an integer.
///
/// ## Errors
///
///  - FactorialDomain: `n` is negative, or it is not an integer.
///  - ThreadPool: a dedicated thread pool could not be created.
pub fn factorial_with<T: Into<Number>>(n: T, rp: &RangeProduct) -> Result<BigInt, Error> {
    let n = integer_value(n.into())?;

    if n.is_negative() {
        return Err(Error::FactorialDomain);
    }

    debug!(bits = n.bits(), "factorial started");

    let ret = rp.compute(&BigInt::one(), &n)?;

    debug!(bits = ret.bits(), "factorial finished");

    Ok(ret)
}

fn integer_value(n: Number) -> Result<BigInt, Error> {
    match n {
        Number::Int(i) => Ok(BigInt::from(i)),
        Number::Integer(i) => Ok(i),
        other => {
            let r = Rational::value_of(other).map_err(|_| Error::FactorialDomain)?;
            if r.is_integer() {
                Ok(r.into_parts().0)
            } else {
                Err(Error::FactorialDomain)
            }
        }
    }
}
