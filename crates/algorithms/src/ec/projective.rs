//! Points of the projective plane over Z/pZ

use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use weierstrass_api::{validate, Error, Result};
use weierstrass_common::{divide, CurveContext};

use super::coordinates::Coordinates;

/// A projective point `(X : Y : Z)`, standing for every triple
/// `(λX, λY, λZ)` with `λ ≠ 0`.
///
/// Points with `Z = 0` are points at infinity. Equality compares the
/// equivalence classes, not the stored triples.
#[derive(Clone, Debug)]
pub struct ProjectivePoint<'c> {
    ctx: &'c CurveContext,
    coords: Coordinates,
}

impl<'c> ProjectivePoint<'c> {
    /// Create a projective point, reducing the coordinates modulo `p`.
    ///
    /// Returns `DegenerateProjection` if the reduced triple is `(0, 0, 0)`.
    pub fn new(
        ctx: &'c CurveContext,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
    ) -> Result<Self> {
        let coords = Coordinates::new(x, y, z, ctx.modulus());
        validate::projective(coords.x(), coords.y(), coords.z())?;
        Ok(Self { ctx, coords })
    }

    /// Create the point `(x : y : 1)`.
    pub fn from_affine(
        ctx: &'c CurveContext,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
    ) -> Result<Self> {
        Self::new(ctx, x, y, BigInt::one())
    }

    /// The canonical point at infinity `(0 : 1 : 0)`.
    pub fn infinity(ctx: &'c CurveContext) -> Self {
        Self {
            ctx,
            coords: Coordinates::new(BigInt::zero(), BigInt::one(), BigInt::zero(), ctx.modulus()),
        }
    }

    /// `(X : -Y : Z)`, the mirror image across the x-axis.
    pub(crate) fn mirrored(&self) -> Self {
        let c = &self.coords;
        Self {
            ctx: self.ctx,
            coords: Coordinates::new(c.x().clone(), -c.y(), c.z().clone(), self.ctx.modulus()),
        }
    }

    /// The context this point was built on.
    pub fn context(&self) -> &'c CurveContext {
        self.ctx
    }

    /// The stored coordinate triple.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    /// Stored `X`.
    pub fn x(&self) -> &BigInt {
        self.coords.x()
    }

    /// Stored `Y`.
    pub fn y(&self) -> &BigInt {
        self.coords.y()
    }

    /// Stored `Z`.
    pub fn z(&self) -> &BigInt {
        self.coords.z()
    }

    /// Whether this is a point at infinity (`Z = 0`).
    pub fn is_infinity(&self) -> bool {
        self.coords.z().is_zero()
    }

    /// Whether both points were built on the same curve.
    pub fn same_curve(&self, other: &ProjectivePoint<'_>) -> bool {
        core::ptr::eq(self.ctx, other.ctx) || self.ctx == other.ctx
    }

    /// The affine abscissa `X / Z`.
    pub fn homogeneous_x(&self) -> Result<BigInt> {
        self.homogeneous(self.coords.x())
    }

    /// The affine ordinate `Y / Z`.
    pub fn homogeneous_y(&self) -> Result<BigInt> {
        self.homogeneous(self.coords.y())
    }

    /// The affine pair `(X / Z, Y / Z)`.
    pub fn to_affine(&self) -> Result<(BigInt, BigInt)> {
        Ok((self.homogeneous_x()?, self.homogeneous_y()?))
    }

    fn homogeneous(&self, coordinate: &BigInt) -> Result<BigInt> {
        if self.is_infinity() {
            return Err(Error::InfinityHasNoAffineForm);
        }
        divide(coordinate, self.coords.z(), self.ctx.modulus())
    }

    /// Check the homogeneous Weierstrass relation
    /// `Y²Z = X³ + aXZ² + bZ³ (mod p)`.
    ///
    /// At infinity only the exact triple `(0, 1, 0)` is accepted. The curve
    /// itself is not checked for singularity.
    pub fn belongs_to(&self, a: &BigInt, b: &BigInt) -> bool {
        let (x, y, z) = (self.coords.x(), self.coords.y(), self.coords.z());
        if self.is_infinity() {
            return x.is_zero() && y.is_one();
        }

        let z_squared = z * z;
        let rhs = x * x * x + a * x * &z_squared + b * &z_squared * z;
        let lhs = y * y * z;
        self.ctx.normalize(&(rhs - lhs)).is_zero()
    }
}

impl PartialEq for ProjectivePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !self.same_curve(other) {
            return false;
        }

        let (x1, y1, z1) = (self.x(), self.y(), self.z());
        let (x2, y2, z2) = (other.x(), other.y(), other.z());
        let vanishes = |n: BigInt| self.ctx.normalize(&n).is_zero();
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => vanishes(x1 * y2 - x2 * y1),
            (false, false) => vanishes(x1 * z2 - x2 * z1) && vanishes(y1 * z2 - y2 * z1),
            _ => false,
        }
    }
}

impl Eq for ProjectivePoint<'_> {}

impl fmt::Display for ProjectivePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coords, f)
    }
}
