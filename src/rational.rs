//! Rational number, its construction and arithmetic.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::{float_to_decimal, Number};

/// A number which is a ratio of two integers.
///
/// The numerator and the denominator are arbitrary precision integers.
/// A rational is always kept in its lowest terms with the sign carried by the numerator,
/// so 2/4 and 1/2, or 1/-2 and -1/2, represent the same value, and zero is always 0/1.
///
/// There is no way to build a rational bypassing the reduction: the fields are private,
/// and all constructors normalize their arguments. All instances are immutable.
#[derive(Debug, Clone)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Reduces `num/den` assuming `den` is positive.
    pub(crate) fn reduced(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive());

        let gcd = num.gcd(&den);
        if gcd.is_one() {
            Rational { num, den }
        } else {
            Rational {
                num: num / &gcd,
                den: den / gcd,
            }
        }
    }

    /// Brings `num/den` to the canonical form.
    ///
    /// ## Errors
    ///
    ///  - ZeroDenominator: `den` is zero.
    pub(crate) fn normalize(num: BigInt, den: BigInt) -> Result<Self, Error> {
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }

        // there is no signed zero
        if num.is_zero() {
            return Ok(Self::zero());
        }

        if den.is_negative() {
            Ok(Self::reduced(-num, -den))
        } else {
            Ok(Self::reduced(num, den))
        }
    }

    pub(crate) fn from_i64_pair(num: i64, den: i64) -> Self {
        Self::reduced(BigInt::from(num), BigInt::from(den))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Rational {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    /// Returns one.
    pub fn one() -> Self {
        Rational {
            num: BigInt::one(),
            den: BigInt::one(),
        }
    }

    /// Constructs a rational from a single number of any supported kind.
    /// A float is taken by its shortest decimal text, so `value_of(0.1)` is exactly 1/10.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `x` is a float, and it is NaN or infinite.
    ///
    /// ## Examples
    ///
    /// ```
    /// use rational_core::Rational;
    ///
    /// let eighth = Rational::value_of(0.125).unwrap();
    /// assert_eq!(eighth.to_string(), "1/8");
    /// ```
    pub fn value_of<T: Into<Number>>(x: T) -> Result<Self, Error> {
        match x.into() {
            Number::Int(i) => Ok(Self::from_integer(BigInt::from(i))),
            Number::Float(f) => Ok(Self::from_decimal(&float_to_decimal(f)?)),
            Number::Integer(i) => Ok(Self::from_integer(i)),
            Number::Decimal(d) => Ok(Self::from_decimal(&d)),
            Number::Rational(r) => Ok(r),
        }
    }

    /// Constructs a rational that represents exactly the division of `num` by `den`.
    /// Arguments can be of different kinds, no precision is required even for decimals.
    ///
    /// ## Errors
    ///
    ///  - ZeroDenominator: `den` is zero.
    ///  - InvalidArgument: one of the arguments is a float, and it is NaN or infinite.
    ///
    /// ## Examples
    ///
    /// ```
    /// use rational_core::Rational;
    ///
    /// let half = Rational::new(0.1, 0.2).unwrap();
    /// assert_eq!(half, Rational::new(1, 2).unwrap());
    /// ```
    pub fn new<N: Into<Number>, D: Into<Number>>(num: N, den: D) -> Result<Self, Error> {
        let num = num.into();
        let den = den.into();

        if num.is_rational() || den.is_rational() {
            let num = Self::value_of(num)?;
            let den = Self::value_of(den)?;
            if den.is_zero() {
                return Err(Error::ZeroDenominator);
            }
            num.div(&den)
        } else if num.is_fractional() || den.is_fractional() {
            let ctx = Context::default();
            let num = num.into_decimal(&ctx)?;
            let den = den.into_decimal(&ctx)?;
            Self::from_decimal_ratio(&num, &den)
        } else {
            Self::normalize(integer_of(num)?, integer_of(den)?)
        }
    }

    /// Constructs a rational from the numerator and the denominator.
    ///
    /// ## Errors
    ///
    ///  - ZeroDenominator: `den` is zero.
    pub fn from_parts(num: BigInt, den: BigInt) -> Result<Self, Error> {
        Self::normalize(num, den)
    }

    /// Constructs a rational from an integer.
    pub fn from_integer(i: BigInt) -> Self {
        Rational {
            num: i,
            den: BigInt::one(),
        }
    }

    /// Constructs a rational from a decimal exactly.
    pub fn from_decimal(d: &BigDecimal) -> Self {
        let (u, scale) = d.as_bigint_and_exponent();

        if scale < 0 {
            Self::from_integer(u * pow10(scale.unsigned_abs()))
        } else {
            Self::reduced(u, pow10(scale as u64))
        }
    }

    /// Exact ratio of two decimals.
    pub(crate) fn from_decimal_ratio(num: &BigDecimal, den: &BigDecimal) -> Result<Self, Error> {
        let (mut n, n_scale) = num.as_bigint_and_exponent();
        let (mut d, d_scale) = den.as_bigint_and_exponent();

        let delta = n_scale - d_scale;
        if delta < 0 {
            n *= pow10(delta.unsigned_abs());
        } else {
            d *= pow10(delta as u64);
        }

        Self::normalize(n, d)
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    /// Returns the denominator. The denominator is always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// Decomposes `self` into the numerator and the denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.num, self.den)
    }

    /// Returns -1, 0, or 1 as `self` is negative, zero, or positive.
    pub fn signum(&self) -> i8 {
        if self.num.is_negative() {
            -1
        } else if self.num.is_zero() {
            0
        } else {
            1
        }
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns true if the denominator of `self` is one.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Rational {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Adds `d2` to `self`.
    pub fn add(&self, d2: &Self) -> Self {
        let n1 = &self.num * &d2.den;
        let n2 = &d2.num * &self.den;
        Self::reduced(n1 + n2, &self.den * &d2.den)
    }

    /// Subtracts `d2` from `self`.
    pub fn sub(&self, d2: &Self) -> Self {
        let n1 = &self.num * &d2.den;
        let n2 = &d2.num * &self.den;
        Self::reduced(n1 - n2, &self.den * &d2.den)
    }

    /// Multiplies `self` by `d2`.
    pub fn mul(&self, d2: &Self) -> Self {
        Self::reduced(&self.num * &d2.num, &self.den * &d2.den)
    }

    /// Divides `self` by `d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        Ok(self.mul(&d2.reciprocal()?))
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }

    /// Returns `1/self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        Self::normalize(self.den.clone(), self.num.clone()).map_err(|_| Error::DivisionByZero)
    }

    /// Returns the decimal approximation of `self` with the precision and the rounding mode of `ctx`.
    /// Trailing zeroes of the fractional part are removed.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision of `ctx` is zero.
    pub fn to_decimal(&self, ctx: &Context) -> Result<BigDecimal, Error> {
        ctx.p_assertion()?;

        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }

        // Scale the quotient so that it has at least p + 2 digits.
        let p = ctx.precision() as i64;
        let k = p + 2 + digit_count(&self.den) - digit_count(&self.num);

        let mag = self.num.abs();
        let (mut q, r) = if k >= 0 {
            (mag * pow10(k as u64)).div_rem(&self.den)
        } else {
            mag.div_rem(&(&self.den * pow10(k.unsigned_abs())))
        };

        // sticky digit
        let mut scale = k;
        if !r.is_zero() {
            q = q * 10u32 + 1u32;
            scale += 1;
        }

        if self.num.is_negative() {
            q = -q;
        }

        ctx.round(&BigDecimal::new(q, scale))
    }

    /// Returns the integer part of `self`. The division truncates toward zero.
    pub fn to_integer(&self) -> BigInt {
        &self.num / &self.den
    }
}

fn digit_count(i: &BigInt) -> i64 {
    BigDecimal::new(i.clone(), 0).digits() as i64
}

fn integer_of(n: Number) -> Result<BigInt, Error> {
    match n {
        Number::Int(i) => Ok(BigInt::from(i)),
        Number::Integer(i) => Ok(i),
        _ => Err(Error::InvalidArgument),
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.signum() == other.signum() && &self.num * &other.den == &other.num * &self.den
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (s1, s2) = (self.signum(), other.signum());
        if s1 != s2 {
            return s1.cmp(&s2);
        }

        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num.hash(state);
        self.den.hash(state);
    }
}
