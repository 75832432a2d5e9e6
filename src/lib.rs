//! # weierstrass
//!
//! Elliptic curve group arithmetic over prime fields, in projective
//! coordinates, with the curve passed explicitly to every point.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! weierstrass = "0.1"
//! ```
//!
//! ```
//! use weierstrass::prelude::*;
//!
//! let ctx = CurveContext::new(7, 2, 1)?;
//! let p = CurvePoint::from_affine(&ctx, 1, 2)?;
//! let q = p.scalar_multiply(3)?.scalar_multiply(6)?.add(&p)?;
//! assert_eq!(q, p.negate());
//! # Ok::<(), weierstrass::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): point arithmetic
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - `weierstrass-api`: error type and validation helpers
//! - `weierstrass-common`: field arithmetic and the curve context
//! - `weierstrass-algorithms`: projective and curve points

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use weierstrass_api as api;
pub use weierstrass_common as common;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use weierstrass_algorithms as algorithms;

pub use num_bigint::BigInt;

/// Common imports for weierstrass users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Field arithmetic and curve parameters
    pub use crate::common::{divide, inverse, normalize, power_mod, CurveContext};

    // Points
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Coordinates, CurvePoint, ProjectivePoint};

    pub use num_bigint::BigInt;
}
