//! Serialization of Rational.
//! A rational is serialized to a string of the form `n/d`.

use serde::{Serialize, Serializer};

use crate::Rational;

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
