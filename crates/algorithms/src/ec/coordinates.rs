//! Raw coordinate triples

use core::fmt;

use num_bigint::BigInt;
use weierstrass_common::normalize;

/// A coordinate triple `(x, y, z)` with every component in `[0, p)`.
///
/// Equality is component-wise; no projective identification happens at this
/// level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

impl Coordinates {
    /// Create a triple, reducing each component modulo `p`.
    pub fn new(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
        p: &BigInt,
    ) -> Self {
        Self {
            x: normalize(&x.into(), p),
            y: normalize(&y.into(), p),
            z: normalize(&z.into(), p),
        }
    }

    /// First component.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Second component.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Third component.
    pub fn z(&self) -> &BigInt {
        &self.z
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.z)
    }
}
