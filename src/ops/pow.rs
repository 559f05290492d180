//! Power.

use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::ctx::Context;
use crate::defs::Error;
use crate::ops::root::nth_root_integer;
use crate::rational::Rational;

impl Rational {
    /// Computes `self` to the power of `exponent`.
    /// If the denominator of `exponent` is not 1, roots are extracted with the precision `ctx`,
    /// and the result is the ratio of the two approximated roots.
    ///
    /// ## Errors
    ///
    ///  - NoRealRoot: `self` is negative, and the integer part of `exponent` is even,
    ///    or the denominator of `exponent` is even.
    ///  - DivisionByZero: `self` is zero, and `exponent` is negative.
    ///  - ExponentOverflow: the numerator or the denominator of `exponent` does not fit `i32`.
    ///  - InvalidArgument: the precision of `ctx` is zero.
    ///
    /// ## Examples
    ///
    /// ```
    /// use rational_core::{Rational, Context, RoundingMode};
    /// use bigdecimal::BigDecimal;
    ///
    /// let ctx = Context::new(20, RoundingMode::ToEven);
    /// let half = Rational::new(1, 2).unwrap();
    /// let two = Rational::value_of(4).unwrap().pow(&half, &ctx).unwrap();
    ///
    /// assert_eq!(two.to_decimal(&ctx).unwrap(), BigDecimal::from(2));
    /// ```
    pub fn pow(&self, exponent: &Rational, ctx: &Context) -> Result<Self, Error> {
        self.pow_impl(exponent, Some(ctx))
    }

    /// Computes `self` to the power of `exponent` exactly.
    ///
    /// ## Errors
    ///
    ///  - PrecisionRequired: the denominator of `exponent` is not 1.
    ///  - NoRealRoot: `self` is negative, and the integer part of `exponent` is even,
    ///    or the denominator of `exponent` is even.
    ///  - DivisionByZero: `self` is zero, and `exponent` is negative.
    ///  - ExponentOverflow: the numerator or the denominator of `exponent` does not fit `i32`.
    pub fn pow_exact(&self, exponent: &Rational) -> Result<Self, Error> {
        self.pow_impl(exponent, None)
    }

    /// Computes `self` to the integer power `e`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero, and `e` is negative.
    pub fn powi(&self, e: i32) -> Result<Self, Error> {
        let p = e.unsigned_abs();
        let n0 = self.numerator().pow(p);
        let d0 = self.denominator().pow(p);

        if e < 0 {
            Self::normalize(d0, n0).map_err(|_| Error::DivisionByZero)
        } else {
            Self::normalize(n0, d0)
        }
    }

    fn pow_impl(&self, exponent: &Rational, ctx: Option<&Context>) -> Result<Self, Error> {
        let p = exponent.numerator().to_i32().ok_or(Error::ExponentOverflow)?;
        let root = exponent.denominator().to_i32().ok_or(Error::ExponentOverflow)?;
        let root = root.unsigned_abs();

        // A negative base requires an odd integer part of the exponent.
        if self.is_negative() && (exponent.to_integer().is_even() || root % 2 == 0) {
            return Err(Error::NoRealRoot);
        }

        if p < 0 && self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if root == 1 {
            return self.powi(p);
        }

        let ctx = ctx.ok_or(Error::PrecisionRequired)?;

        let neg = p < 0;
        let p = p.unsigned_abs();
        let n0 = self.numerator().pow(p);
        let d0 = self.denominator().pow(p);

        // odd root of a negative number
        let negative = n0.is_negative();

        let n = nth_root_integer(&n0.abs(), root, ctx)?;
        let d = nth_root_integer(&d0, root, ctx)?;

        let ret = if neg {
            Self::from_decimal_ratio(&d, &n)?
        } else {
            Self::from_decimal_ratio(&n, &d)?
        };

        Ok(if negative { ret.neg() } else { ret })
    }
}
