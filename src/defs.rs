//! Definitions.

use core::fmt::Display;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision in significant decimal digits.
pub const DEFAULT_P: usize = 34;

/// Default size of a range below which the range product is computed sequentially.
pub const DEFAULT_THRESHOLD: usize = 10_000;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Denominator of a constructed number is zero.
    ZeroDenominator,

    /// Divisor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// Even root of a negative number was requested.
    NoRealRoot,

    /// A fractional power was requested without a precision context.
    PrecisionRequired,

    /// Numerator or denominator of an exponent does not fit a machine integer.
    ExponentOverflow,

    /// Factorial of a negative or a non-integer number.
    FactorialDomain,

    /// Worker pool could not be created.
    ThreadPool,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::ZeroDenominator => "zero denominator",
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::NoRealRoot => "real principal root does not exist",
            Error::PrecisionRequired => "precision context is required for a fractional power",
            Error::ExponentOverflow => "exponent overflow",
            Error::FactorialDomain => {
                "the factorial function is only defined for non-negative integers"
            }
            Error::ThreadPool => "worker pool could not be created",
        };
        f.write_str(repr)
    }
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round toward zero.
    ToZero,

    /// Round away from zero.
    FromZero,

    /// Round toward positive infinity.
    Ceiling,

    /// Round toward negative infinity.
    Floor,

    /// Round half away from zero.
    HalfFromZero,

    /// Round half toward zero.
    HalfToZero,

    /// Round half to even.
    ToEven,
}

impl From<RoundingMode> for bigdecimal::RoundingMode {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::ToZero => bigdecimal::RoundingMode::Down,
            RoundingMode::FromZero => bigdecimal::RoundingMode::Up,
            RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
            RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
            RoundingMode::HalfFromZero => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfToZero => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::ToEven => bigdecimal::RoundingMode::HalfEven,
        }
    }
}
