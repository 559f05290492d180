//! High-level operations on the numbers.

pub mod factorial;
mod pow;
pub mod product;
pub mod root;
