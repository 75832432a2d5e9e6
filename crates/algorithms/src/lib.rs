//! Elliptic curve point arithmetic over prime fields
//!
//! This crate layers three point abstractions on top of the field arithmetic
//! in `weierstrass-common`:
//!
//! - [`Coordinates`]: a raw coordinate triple reduced modulo `p`
//! - [`ProjectivePoint`]: an equivalence class `(X : Y : Z)` with infinity,
//!   class equality and recovery of affine coordinates
//! - [`CurvePoint`]: a projective point known to lie on the curve, carrying
//!   the group law
//!
//! Each layer contains the one below it rather than extending it. Points
//! borrow the [`CurveContext`] they were built on.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub use weierstrass_api::{validate, Error, Result};
pub use weierstrass_common::CurveContext;

// Elliptic curve primitives
pub mod ec;
pub use ec::{Coordinates, CurvePoint, ProjectivePoint};
