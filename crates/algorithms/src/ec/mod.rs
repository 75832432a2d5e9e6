//! Elliptic Curve Primitives
//!
//! Points on a short Weierstrass curve y² = x³ + ax + b over Z/pZ, kept in
//! projective coordinates so that intermediate values never need a field
//! division. The group identity is the point at infinity `(0 : 1 : 0)`.

mod coordinates;
mod point;
mod projective;

pub use coordinates::Coordinates;
pub use point::CurvePoint;
pub use projective::ProjectivePoint;
