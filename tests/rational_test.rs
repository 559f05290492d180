//! This test suite exercises the public interface of the library.

use std::collections::HashSet;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use itertools::iproduct;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use rand::random;
use rational_core::{
    consts, factorial, factorial_with, sqrt, Context, Error, RangeProduct, Rational, RoundingMode,
};

fn rand_rational() -> Rational {
    let n = random::<i32>() as i64;
    let mut d = random::<i32>() as i64;
    if d == 0 {
        d = 1;
    }
    Rational::new(n, d).unwrap()
}

#[test]
fn exact_construction() {
    let x = Rational::new(1, 3).unwrap();
    assert_eq!(x.numerator(), &BigInt::from(1));
    assert_eq!(x.denominator(), &BigInt::from(3));
    assert_eq!(x.to_string(), "1/3");

    let a = Rational::new(2, 4).unwrap();
    let b = Rational::new(1, 2).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "1/2");
    assert_eq!(b.to_string(), "1/2");

    // fractional inputs are divided exactly
    assert_eq!(Rational::new(0.1, 0.2).unwrap(), b);
    assert_eq!(Rational::new(0.1, 3).unwrap(), Rational::new(1, 30).unwrap());

    assert_eq!(Rational::new(1, 0), Err(Error::ZeroDenominator));
    assert_eq!(Rational::new(0.5, 0.0), Err(Error::ZeroDenominator));
}

#[test]
fn normalization() {
    for _ in 0..1000 {
        let n = random::<i32>() as i64;
        let d = random::<i32>() as i64;
        if d == 0 {
            continue;
        }

        let r = Rational::new(n, d).unwrap();
        assert!(r.denominator().is_positive());
        assert!(r.numerator().gcd(r.denominator()).is_one());
        assert_eq!(r.numerator() * BigInt::from(d), r.denominator() * BigInt::from(n));
    }

    for d in [1i64, -1, 7, -100, i64::MAX, i64::MIN] {
        let z = Rational::new(0, d).unwrap();
        assert_eq!(z, Rational::zero());
        assert_eq!(z.denominator(), &BigInt::one());
    }
}

#[test]
fn decimal_round_trip() {
    let ctx = Context::new(50, RoundingMode::ToEven);

    for _ in 0..1000 {
        let m = random::<i64>();
        let scale = (random::<u8>() % 40) as i64;
        let x = BigDecimal::new(BigInt::from(m), scale);

        let r = Rational::value_of(x.clone()).unwrap();
        assert_eq!(r.to_decimal(&ctx).unwrap(), x);
    }

    let x = BigDecimal::from_str("-12.5").unwrap();
    let r = Rational::value_of(&x).unwrap();
    assert_eq!(r, Rational::new(-25, 2).unwrap());
    assert_eq!(r.to_decimal(&Context::DECIMAL32).unwrap(), x);
}

#[test]
fn algebraic_identities() {
    for _ in 0..1000 {
        let a = rand_rational();
        let b = rand_rational();

        assert_eq!(&a + (-&a), *consts::ZERO);
        if !a.is_zero() {
            assert_eq!(&a * a.reciprocal().unwrap(), *consts::ONE);
        }
        if !b.is_zero() {
            assert_eq!(a.div(&b).unwrap(), &a * b.reciprocal().unwrap());
        } else {
            assert_eq!(a.div(&b), Err(Error::DivisionByZero));
        }

        // order is consistent with equality
        assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        assert_eq!(a.cmp(&b), (&a - &b).signum().cmp(&0));
    }
}

#[test]
fn hash_consistency() {
    let mut set = HashSet::new();

    for (n, k) in iproduct!(-5i64..=5, 1i64..=4) {
        set.insert(Rational::new(n * k, 3 * k).unwrap());
        set.insert(Rational::new(-n * k, -3 * k).unwrap());
    }

    assert_eq!(set.len(), 11);
    assert!(set.contains(&Rational::zero()));
    assert!(set.contains(&Rational::new(1, 3).unwrap()));
}

#[test]
fn factorials() {
    assert_eq!(factorial(0).unwrap(), BigInt::one());
    assert_eq!(factorial(5).unwrap(), BigInt::from(120));
    assert_eq!(factorial(20).unwrap(), BigInt::from(2432902008176640000u64));

    assert_eq!(factorial(-1), Err(Error::FactorialDomain));
}

#[test]
fn threshold_independence() {
    for n in [0u32, 1, 20, 10001] {
        let end = BigInt::from(n);
        let results: Vec<BigInt> = [1, 100, 10_000]
            .iter()
            .map(|t| RangeProduct::new().with_threshold(*t).compute(&BigInt::one(), &end).unwrap())
            .collect();

        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
        assert_eq!(results[2], factorial(n).unwrap());
    }
}

#[test]
fn square_root_via_power() {
    let ctx = Context::new(20, RoundingMode::ToEven);

    let four = Rational::value_of(4).unwrap();
    let half = Rational::new(1, 2).unwrap();
    let two = four.pow(&half, &ctx).unwrap();
    assert_eq!(two.to_decimal(&ctx).unwrap(), BigDecimal::from(2));

    assert_eq!(Rational::value_of(-1).unwrap().pow(&half, &ctx), Err(Error::NoRealRoot));

    assert_eq!(
        sqrt(2, &ctx).unwrap(),
        BigDecimal::from_str("1.4142135623730950488").unwrap()
    );
    assert_eq!(sqrt(-2, &ctx), Err(Error::NoRealRoot));
}

#[test]
fn negative_base_powers() {
    let ctx = Context::new(20, RoundingMode::ToEven);
    let minus_two = Rational::value_of(-2).unwrap();
    let minus_eight = Rational::value_of(-8).unwrap();

    assert_eq!(minus_two.pow(&Rational::from(2), &ctx), Err(Error::NoRealRoot));
    assert_eq!(minus_eight.pow(&Rational::new(1, 3).unwrap(), &ctx), Err(Error::NoRealRoot));

    assert_eq!(minus_two.pow(&Rational::from(3), &ctx).unwrap(), Rational::from(-8));
    assert_eq!(minus_two.pow_exact(&Rational::from(-1)).unwrap(), Rational::new(-1, 2).unwrap());
}

#[test]
fn directed_rounding() {
    let third = Rational::new(-1, 3).unwrap();

    let ceil = third.to_decimal(&Context::new(3, RoundingMode::Ceiling)).unwrap();
    let floor = third.to_decimal(&Context::new(3, RoundingMode::Floor)).unwrap();
    let half = third.to_decimal(&Context::new(3, RoundingMode::HalfFromZero)).unwrap();

    assert_eq!(ceil, BigDecimal::from_str("-0.333").unwrap());
    assert_eq!(floor, BigDecimal::from_str("-0.334").unwrap());
    assert_eq!(half, BigDecimal::from_str("-0.333").unwrap());
}

#[ignore]
#[test]
fn factorial_perf() {
    let n = 200_000u32;
    for threads in [None, Some(1), Some(4)] {
        let rp = RangeProduct::new().with_threads(threads);
        let start_time = std::time::Instant::now();
        let f = factorial_with(n, &rp).unwrap();
        let time = start_time.elapsed();
        println!("{:?} threads: {} bits, {:?}", threads, f.bits(), time);
    }
}
