//! Common implementations shared by the weierstrass point layers
//!
//! This crate provides the prime field arithmetic every coordinate
//! computation goes through, and the curve context that carries the field
//! modulus and the curve coefficients.

pub mod ec_common;
pub mod math_common;

pub use ec_common::CurveContext;
pub use math_common::{divide, inverse, normalize, power_mod};
