//! N-th root computation.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::trace;

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Number;
use crate::rational::Rational;

/// Extra digits used for intermediate results which are rounded afterwards.
const GUARD_DIGITS: usize = 3;

/// Computes the `n`-th root of a non-negative integer `value` with at least the precision of `ctx`.
/// The result is within one unit in the last place, and it is not rounded.
///
/// ## Errors
///
///  - InvalidArgument: `value` is negative, `n` is zero, or the precision of `ctx` is zero.
pub fn nth_root_integer(value: &BigInt, n: u32, ctx: &Context) -> Result<BigDecimal, Error> {
    root_scaled(value, 0, n, ctx)
}

/// Computes the `n`-th root of a non-negative decimal `d` with at least the precision of `ctx`.
/// The result is within one unit in the last place, and it is not rounded.
///
/// ## Errors
///
///  - InvalidArgument: `d` is negative, `n` is zero, or the precision of `ctx` is zero.
pub fn nth_root_decimal(d: &BigDecimal, n: u32, ctx: &Context) -> Result<BigDecimal, Error> {
    let (value, scale) = d.as_bigint_and_exponent();
    root_scaled(&value, scale, n, ctx)
}

// Root of value * 10^-scale.
fn root_scaled(value: &BigInt, scale: i64, n: u32, ctx: &Context) -> Result<BigDecimal, Error> {
    ctx.p_assertion()?;

    if n == 0 || value.is_negative() {
        return Err(Error::InvalidArgument);
    }

    if value.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let n_i = i64::from(n);

    // The scale of the radicand must be a multiple of n.
    let adjustment = n_i - scale % n_i;
    let new_scale = (scale + adjustment) / n_i;

    let precision = i64::try_from(ctx.precision()).map_err(|_| Error::InvalidArgument)? + adjustment;
    let padding = pow10((precision * n_i + adjustment) as u64);

    let root = newton_approximate(&(value * padding), n);

    Ok(BigDecimal::new(root, new_scale + precision))
}

// Integer n-th root of `raw` within one unit.
fn newton_approximate(raw: &BigInt, n: u32) -> BigInt {
    let n_big = BigInt::from(n);
    let one = BigInt::one();

    let mut guess = BigInt::one() << (raw.bits() / u64::from(n));
    let mut iterations = 0usize;

    loop {
        let powered = guess.pow(n - 1);
        let delta = (raw / &powered - &guess) / &n_big;
        guess += &delta;
        iterations += 1;

        if delta.abs() <= one {
            break;
        }
    }

    trace!(n, iterations, "newton iteration converged");

    guess
}

/// Computes the `n`-th root of `x` with the precision and the rounding mode of `ctx`.
/// An odd root of a negative number is negative.
///
/// ## Errors
///
///  - NoRealRoot: `n` is even, and `x` is negative.
///  - InvalidArgument: `n` is zero, the precision of `ctx` is zero, or `x` is a float, and it is not finite.
///
/// ## Examples
///
/// ```
/// use rational_core::{nth_root, Context, RoundingMode};
/// use bigdecimal::BigDecimal;
///
/// let ctx = Context::new(10, RoundingMode::ToEven);
/// let r = nth_root(-32, 5, &ctx).unwrap();
/// assert_eq!(r, BigDecimal::from(-2));
/// ```
pub fn nth_root<T: Into<Number>>(x: T, n: u32, ctx: &Context) -> Result<BigDecimal, Error> {
    ctx.p_assertion()?;

    if n == 0 {
        return Err(Error::InvalidArgument);
    }

    let wctx = ctx.widened(GUARD_DIGITS);
    let (value, scale) = x.into().into_decimal(&wctx)?.as_bigint_and_exponent();

    let negative = value.is_negative();
    if negative && n % 2 == 0 {
        return Err(Error::NoRealRoot);
    }

    let root = root_scaled(&value.abs(), scale, n, &wctx)?;

    ctx.round(&if negative { -root } else { root })
}

/// Computes the square root of `x` with the precision and the rounding mode of `ctx`.
///
/// ## Errors
///
///  - NoRealRoot: `x` is negative.
///  - InvalidArgument: the precision of `ctx` is zero, or `x` is a float, and it is not finite.
pub fn sqrt<T: Into<Number>>(x: T, ctx: &Context) -> Result<BigDecimal, Error> {
    nth_root(x, 2, ctx)
}

/// Computes the cube root of `x` with the precision and the rounding mode of `ctx`.
///
/// ## Errors
///
///  - InvalidArgument: the precision of `ctx` is zero, or `x` is a float, and it is not finite.
pub fn cbrt<T: Into<Number>>(x: T, ctx: &Context) -> Result<BigDecimal, Error> {
    nth_root(x, 3, ctx)
}

/// Computes `sqrt(x^2 + y^2)` with the precision and the rounding mode of `ctx`.
/// The sum of squares is computed exactly.
///
/// ## Errors
///
///  - InvalidArgument: the precision of `ctx` is zero, or an argument is a float, and it is not finite.
pub fn hypot<X: Into<Number>, Y: Into<Number>>(x: X, y: Y, ctx: &Context) -> Result<BigDecimal, Error> {
    let x = Rational::value_of(x)?;
    let y = Rational::value_of(y)?;

    sqrt(x.mul(&x).add(&y.mul(&y)), ctx)
}
