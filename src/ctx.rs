//! Context defines how lossy decimal conversions are performed.

use core::num::NonZeroU64;

use bigdecimal::BigDecimal;

use crate::defs::{Error, RoundingMode, DEFAULT_P, DEFAULT_RM};

/// Context contains the number of significant decimal digits and the rounding mode
/// used when a rational value is approximated by a decimal, or a root is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    p: usize,
    rm: RoundingMode,
}

impl Context {
    /// 7 digits, rounding half to even.
    pub const DECIMAL32: Context = Context::new(7, RoundingMode::ToEven);

    /// 16 digits, rounding half to even.
    pub const DECIMAL64: Context = Context::new(16, RoundingMode::ToEven);

    /// 34 digits, rounding half to even.
    pub const DECIMAL128: Context = Context::new(34, RoundingMode::ToEven);

    /// Create a new context with precision `p` decimal digits and the rounding mode `rm`.
    pub const fn new(p: usize, rm: RoundingMode) -> Self {
        Context { p, rm }
    }

    /// Sets the precision of the context.
    pub fn set_precision(&mut self, p: usize) -> &mut Self {
        self.p = p;
        self
    }

    /// Sets the rounding mode of the context.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rm = rm;
        self
    }

    /// Returns the precision of the context.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns a copy of the context with precision increased by `extra` digits.
    pub(crate) fn widened(&self, extra: usize) -> Self {
        Context::new(self.p + extra, self.rm)
    }

    /// Checks that the context can be used for computations.
    pub(crate) fn p_assertion(&self) -> Result<(), Error> {
        if self.p == 0 {
            Err(Error::InvalidArgument)
        } else {
            Ok(())
        }
    }

    /// Rounds `d` to the precision of the context using its rounding mode.
    /// Trailing zeroes of the fractional part are removed, the integer part is kept as is.
    pub(crate) fn round(&self, d: &BigDecimal) -> Result<BigDecimal, Error> {
        let p = NonZeroU64::new(self.p as u64).ok_or(Error::InvalidArgument)?;

        let ret = d.with_precision_round(p, self.rm.into()).normalized();
        if ret.as_bigint_and_exponent().1 < 0 {
            Ok(ret.with_scale(0))
        } else {
            Ok(ret)
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(DEFAULT_P, DEFAULT_RM)
    }
}

impl From<(usize, RoundingMode)> for Context {
    fn from((p, rm): (usize, RoundingMode)) -> Self {
        Context::new(p, rm)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;
    use num_bigint::BigInt;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_context() {
        let mut ctx = Context::default();
        assert_eq!(ctx.precision(), DEFAULT_P);
        assert_eq!(ctx.rounding_mode(), DEFAULT_RM);

        ctx.set_precision(64).set_rounding_mode(RoundingMode::Floor);
        assert_eq!(ctx, Context::from((64, RoundingMode::Floor)));
        assert_eq!(ctx.widened(3).precision(), 67);

        assert!(ctx.p_assertion().is_ok());
        assert_eq!(ctx.set_precision(0).p_assertion(), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_round() {
        let ctx = |p, rm| Context::new(p, rm);

        let d = dec("123.456");
        assert_eq!(ctx(10, RoundingMode::ToEven).round(&d).unwrap(), d);
        assert_eq!(ctx(4, RoundingMode::ToZero).round(&d).unwrap(), dec("123.4"));
        assert_eq!(ctx(4, RoundingMode::ToEven).round(&d).unwrap(), dec("123.5"));
        assert_eq!(ctx(4, RoundingMode::Ceiling).round(&-d.clone()).unwrap(), dec("-123.4"));
        assert_eq!(ctx(4, RoundingMode::Floor).round(&-d.clone()).unwrap(), dec("-123.5"));
        assert_eq!(ctx(4, RoundingMode::FromZero).round(&dec("-123.41")).unwrap(), dec("-123.5"));

        // ties
        let d = dec("12.5");
        assert_eq!(ctx(2, RoundingMode::ToEven).round(&d).unwrap(), dec("12"));
        assert_eq!(ctx(2, RoundingMode::HalfFromZero).round(&d).unwrap(), dec("13"));
        assert_eq!(ctx(2, RoundingMode::HalfToZero).round(&d).unwrap(), dec("12"));
        assert_eq!(ctx(2, RoundingMode::ToEven).round(&dec("13.5")).unwrap(), dec("14"));

        // carry into a new digit
        assert_eq!(ctx(2, RoundingMode::FromZero).round(&dec("9.99")).unwrap(), dec("10"));

        // only fractional zeroes are stripped
        let r = ctx(5, RoundingMode::ToEven).round(&dec("1.20000")).unwrap();
        assert_eq!(r.as_bigint_and_exponent(), (BigInt::from(12), 1));
        let r = ctx(2, RoundingMode::ToEven).round(&dec("1234")).unwrap();
        assert_eq!(r.as_bigint_and_exponent(), (BigInt::from(1200), 0));
        let r = ctx(5, RoundingMode::ToEven).round(&BigDecimal::from(0)).unwrap();
        assert_eq!(r, BigDecimal::from(0));

        assert_eq!(ctx(0, RoundingMode::ToEven).round(&dec("1.5")), Err(Error::InvalidArgument));
    }
}
