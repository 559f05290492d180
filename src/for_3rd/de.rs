//! Deserialization of Rational.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::Rational;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct RationalVisitor {}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RationalVisitor {})
    }
}

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a `String` or a `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Rational::from(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Rational::from(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Rational::value_of(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Rational::from_str(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;

    use crate::Rational;

    #[test]
    fn from_json() {
        let x = Rational::new(1, 3).unwrap();
        assert_eq!(x, from_str::<Rational>("\"1/3\"").unwrap());
        assert_eq!(x, from_str::<Rational>("\"2/6\"").unwrap());

        let x = Rational::new(3, 10).unwrap();
        assert_eq!(x, from_str::<Rational>("0.3").unwrap());
        assert_eq!(x, from_str::<Rational>("\"0.3\"").unwrap());

        assert_eq!(Rational::from(-7), from_str::<Rational>("-7").unwrap());
        assert_eq!(Rational::from(u64::MAX), from_str::<Rational>("18446744073709551615").unwrap());

        assert!(from_str::<Rational>("\"1/0\"").is_err());
        assert!(from_str::<Rational>("\"x\"").is_err());
        let e = from_str::<Rational>("true").unwrap_err();
        assert!(e.to_string().contains("expected a `String` or a `Number`"));
    }
}
