//! Shared constants and helpers.

pub mod consts;
pub(crate) mod util;
