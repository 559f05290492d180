//! Static constants.

use crate::rational::Rational;
use lazy_static::lazy_static;

lazy_static! {

    /// 0
    pub static ref ZERO: Rational = Rational::from_i64_pair(0, 1);

    /// 1
    pub static ref ONE: Rational = Rational::from_i64_pair(1, 1);

    /// 10
    pub static ref TEN: Rational = Rational::from_i64_pair(10, 1);

    /// 1/2
    pub static ref HALF: Rational = Rational::from_i64_pair(1, 2);

    /// 1/4
    pub static ref QUARTER: Rational = Rational::from_i64_pair(1, 4);

    /// 1/3
    pub static ref THIRD: Rational = Rational::from_i64_pair(1, 3);

    /// 1/10
    pub static ref TENTH: Rational = Rational::from_i64_pair(1, 10);
}
