//! Error type definitions for field and curve operations

use num_bigint::BigInt;
use thiserror::Error;

/// Primary error type for field and curve operations.
///
/// Every variant is terminal for the operation that produced it: the
/// arithmetic is deterministic, so retrying with the same inputs yields the
/// same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A divisor reduced to zero modulo the field modulus.
    ///
    /// Also raised by the tangent step of the group law when a point has
    /// affine `y = 0` (a point of order two).
    #[error("divided by 0 modulo {modulus}")]
    DivisionByZero {
        /// Modulus the division was attempted in
        modulus: BigInt,
    },

    /// The normalized coordinate triple was `(0, 0, 0)`.
    #[error("point (0 : 0 : 0) is not projective")]
    DegenerateProjection,

    /// The coordinates fail the homogeneous Weierstrass relation.
    #[error("point ({x} : {y} : {z}) is not on curve y^2 = x^3 + {a}x + {b}")]
    PointNotOnCurve {
        /// Normalized X coordinate
        x: BigInt,
        /// Normalized Y coordinate
        y: BigInt,
        /// Normalized Z coordinate
        z: BigInt,
        /// Curve coefficient `a`
        a: BigInt,
        /// Curve coefficient `b`
        b: BigInt,
    },

    /// Affine coordinates were requested for the point at infinity.
    #[error("infinity cannot have homogeneous coordinates")]
    InfinityHasNoAffineForm,

    /// The field modulus is too small to define a curve over.
    #[error("invalid modulus {modulus}: expected a prime greater than 2")]
    InvalidModulus {
        /// The rejected modulus
        modulus: BigInt,
    },

    /// Two points built on different curve contexts were combined.
    #[error("points belong to different curves")]
    CurveMismatch,
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `DivisionByZero` error
    pub fn division_by_zero(modulus: &BigInt) -> Self {
        Error::DivisionByZero {
            modulus: modulus.clone(),
        }
    }
}
