//! Kinds of numbers accepted by the constructors and the root functions.

use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};

use crate::ctx::Context;
use crate::defs::Error;
use crate::rational::Rational;

/// A number of one of the supported kinds.
///
/// Machine integers are widened into `Int`, machine floats into `Float`.
/// Any value converts into `Number` with `From`, so functions accepting `impl Into<Number>`
/// can be called with plain integers, floats, big integers, big decimals, or rationals.
#[derive(Debug, Clone)]
pub enum Number {
    /// Machine integer.
    Int(i128),

    /// Machine floating point number.
    Float(f64),

    /// Arbitrary precision integer.
    Integer(BigInt),

    /// Arbitrary precision decimal.
    Decimal(BigDecimal),

    /// Rational number.
    Rational(Rational),
}

impl Number {
    /// Returns true if the number has a fractional representation: a float or a decimal.
    pub fn is_fractional(&self) -> bool {
        matches!(self, Number::Float(_) | Number::Decimal(_))
    }

    /// Returns true if the number is a rational.
    pub fn is_rational(&self) -> bool {
        matches!(self, Number::Rational(_))
    }

    /// Converts the number to a decimal. All kinds except rationals convert exactly,
    /// a rational is divided out with the precision `ctx`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the number is a float, and it is not finite.
    pub(crate) fn into_decimal(self, ctx: &Context) -> Result<BigDecimal, Error> {
        match self {
            Number::Int(i) => Ok(BigDecimal::new(BigInt::from(i), 0)),
            Number::Float(f) => float_to_decimal(f),
            Number::Integer(i) => Ok(BigDecimal::new(i, 0)),
            Number::Decimal(d) => Ok(d),
            Number::Rational(r) => r.to_decimal(ctx),
        }
    }
}

/// Converts a float to the decimal with the shortest text which reads back as the same float.
pub(crate) fn float_to_decimal(f: f64) -> Result<BigDecimal, Error> {
    if !f.is_finite() {
        return Err(Error::InvalidArgument);
    }

    BigDecimal::from_str(&format!("{:e}", f)).map_err(|_| Error::InvalidArgument)
}

macro_rules! impl_int_conv {
    ($($s:ty),*) => {
        $(
            impl From<$s> for Number {
                fn from(i: $s) -> Self {
                    Number::Int(i as i128)
                }
            }
        )*
    };
}

impl_int_conv!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Number {
    fn from(i: u128) -> Self {
        Number::Integer(BigInt::from(i))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        // Widening is done through the shortest text of `f`, so 0.1f32 becomes 0.1.
        Number::Float(f.to_string().parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl From<BigInt> for Number {
    fn from(i: BigInt) -> Self {
        Number::Integer(i)
    }
}

impl From<&BigInt> for Number {
    fn from(i: &BigInt) -> Self {
        Number::Integer(i.clone())
    }
}

impl From<BigUint> for Number {
    fn from(i: BigUint) -> Self {
        Number::Integer(BigInt::from(i))
    }
}

impl From<BigDecimal> for Number {
    fn from(d: BigDecimal) -> Self {
        Number::Decimal(d)
    }
}

impl From<&BigDecimal> for Number {
    fn from(d: &BigDecimal) -> Self {
        Number::Decimal(d.clone())
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Number::Rational(r)
    }
}

impl From<&Rational> for Number {
    fn from(r: &Rational) -> Self {
        Number::Rational(r.clone())
    }
}
