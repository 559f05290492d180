//! Implementation of the standard library and `num-traits` traits for `Rational`.

use core::fmt::{Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

use crate::ctx::Context;
use crate::defs::{Error, RoundingMode};
use crate::rational::Rational;

/// Context of conversion to `f64`: 64 digits keep double rounding away.
const DOUBLE_CONTEXT: Context = Context::new(64, RoundingMode::HalfFromZero);

//
// ops traits
//

macro_rules! impl_arith_op {
    ($trait:ident, $fname:ident, $assign_trait:ident, $assign_fname:ident) => {
        impl $trait for Rational {
            type Output = Rational;
            fn $fname(self, rhs: Rational) -> Self::Output {
                Rational::$fname(&self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;
            fn $fname(self, rhs: &Rational) -> Self::Output {
                Rational::$fname(&self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;
            fn $fname(self, rhs: Rational) -> Self::Output {
                Rational::$fname(self, &rhs)
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;
            fn $fname(self, rhs: &Rational) -> Self::Output {
                Rational::$fname(self, rhs)
            }
        }

        impl $assign_trait for Rational {
            fn $assign_fname(&mut self, rhs: Rational) {
                *self = Rational::$fname(self, &rhs)
            }
        }

        impl $assign_trait<&Rational> for Rational {
            fn $assign_fname(&mut self, rhs: &Rational) {
                *self = Rational::$fname(self, rhs)
            }
        }
    };
}

impl_arith_op!(Add, add, AddAssign, add_assign);
impl_arith_op!(Sub, sub, SubAssign, sub_assign);
impl_arith_op!(Mul, mul, MulAssign, mul_assign);

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Self::Output {
        Rational::neg(&self)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Self::Output {
        Rational::neg(self)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        let mut acc = Rational::zero();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        let mut acc = Rational::zero();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        let mut acc = Rational::one();
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        let mut acc = Rational::one();
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

//
// conversions
//

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_decimal(&Context::DECIMAL128).ok()?.to_string().parse().ok()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_decimal(&DOUBLE_CONTEXT).ok()?.to_string().parse().ok()
    }
}

macro_rules! impl_int_conv {
    ($($s:ty),*) => {
        $(
            impl From<$s> for Rational {
                fn from(i: $s) -> Self {
                    Rational::from_integer(BigInt::from(i))
                }
            }
        )*
    };
}

impl_int_conv!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(i: BigInt) -> Self {
        Rational::from_integer(i)
    }
}

impl From<BigUint> for Rational {
    fn from(i: BigUint) -> Self {
        Rational::from_integer(BigInt::from(i))
    }
}

impl From<&BigDecimal> for Rational {
    fn from(d: &BigDecimal) -> Self {
        Rational::from_decimal(d)
    }
}

impl From<BigDecimal> for Rational {
    fn from(d: BigDecimal) -> Self {
        Rational::from_decimal(&d)
    }
}

impl TryFrom<f64> for Rational {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Rational::value_of(f)
    }
}

impl TryFrom<f32> for Rational {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self, Self::Error> {
        Rational::value_of(f)
    }
}

//
// formatting
//

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Parses `n/d`, an integer, or a decimal like `0.125` or `1e-3`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();

        match src.split_once('/') {
            Some((n, d)) => {
                let n = BigInt::from_str(n.trim()).map_err(|_| Error::InvalidArgument)?;
                let d = BigInt::from_str(d.trim()).map_err(|_| Error::InvalidArgument)?;
                Rational::from_parts(n, d)
            }
            None => {
                let d = BigDecimal::from_str(src).map_err(|_| Error::InvalidArgument)?;
                Ok(Rational::from_decimal(&d))
            }
        }
    }
}
