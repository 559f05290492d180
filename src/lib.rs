//! Exact rational numbers over arbitrary precision integers.
//!
//! A [`Rational`] is always kept in canonical form: the numerator and the denominator
//! are coprime, the denominator is positive, and zero is `0/1`.
//! Structurally equal values are therefore numerically equal, and hash identically.
//!
//! Besides the field arithmetic the library provides:
//!
//!  - n-th roots of integers and decimals computed by integer Newton iteration to a requested decimal precision,
//!  - powers with rational exponents,
//!  - the product of a range of integers computed with fork-join parallelism, and the factorial built on top of it.
//!
//! ## Examples
//!
//! ```
//! use rational_core::{Rational, Context, RoundingMode, factorial};
//! use num_bigint::BigInt;
//!
//! // Canonical form.
//! let a = Rational::new(2, 4).unwrap();
//! let b = Rational::new(0.1, 0.2).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "1/2");
//!
//! // Root with 30 significant digits.
//! let ctx = Context::new(30, RoundingMode::ToEven);
//! let two = Rational::value_of(2).unwrap();
//! let root = two.pow(&a, &ctx).unwrap();
//! assert_eq!(root.to_decimal(&ctx).unwrap().to_string(), "1.41421356237309504880168872421");
//!
//! // Factorial.
//! assert_eq!(factorial(5).unwrap(), BigInt::from(120));
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events: root computations and range splits at `trace` level,
//! factorial progress and thread pool creation at `debug` level.
//! No subscriber is installed by the library.
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
pub mod ctx;
mod defs;
mod ext;
mod num;
mod ops;
mod rational;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::num::Number;
pub use crate::ops::factorial::factorial;
pub use crate::ops::factorial::factorial_with;
pub use crate::ops::product::RangeProduct;
pub use crate::ops::root::cbrt;
pub use crate::ops::root::hypot;
pub use crate::ops::root::nth_root;
pub use crate::ops::root::nth_root_decimal;
pub use crate::ops::root::nth_root_integer;
pub use crate::ops::root::sqrt;
pub use crate::rational::Rational;

pub use crate::common::consts;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::DEFAULT_THRESHOLD;
