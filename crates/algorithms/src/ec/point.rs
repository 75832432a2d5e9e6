//! Points of an elliptic curve and the chord-and-tangent group law

use core::fmt;
use core::ops::Neg;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use weierstrass_api::{validate, Error, Result};
use weierstrass_common::{divide, CurveContext};

use super::projective::ProjectivePoint;

/// A point on the curve `y² = x³ + ax + b` of its [`CurveContext`].
///
/// A `CurvePoint` can only be obtained through a validating constructor or as
/// the result of a group operation, so it always satisfies the curve
/// equation. Points are immutable: every operation returns a new point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurvePoint<'c> {
    inner: ProjectivePoint<'c>,
}

impl<'c> CurvePoint<'c> {
    /// Create a curve point from projective coordinates.
    ///
    /// Returns `DegenerateProjection` for `(0, 0, 0)` and `PointNotOnCurve`
    /// when the coordinates fail the curve equation.
    pub fn new(
        ctx: &'c CurveContext,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        z: impl Into<BigInt>,
    ) -> Result<Self> {
        ProjectivePoint::new(ctx, x, y, z)?.try_into()
    }

    /// Create the curve point `(x, y)` from affine coordinates.
    pub fn from_affine(
        ctx: &'c CurveContext,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
    ) -> Result<Self> {
        ProjectivePoint::from_affine(ctx, x, y)?.try_into()
    }

    /// The group identity `(0 : 1 : 0)`.
    pub fn infinity(ctx: &'c CurveContext) -> Self {
        Self {
            inner: ProjectivePoint::infinity(ctx),
        }
    }

    /// The context this point was built on.
    pub fn context(&self) -> &'c CurveContext {
        self.inner.context()
    }

    /// The underlying projective point.
    pub fn as_projective(&self) -> &ProjectivePoint<'c> {
        &self.inner
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.inner.is_infinity()
    }

    /// The affine abscissa. Fails with `InfinityHasNoAffineForm` at infinity.
    pub fn homogeneous_x(&self) -> Result<BigInt> {
        self.inner.homogeneous_x()
    }

    /// The affine ordinate. Fails with `InfinityHasNoAffineForm` at infinity.
    pub fn homogeneous_y(&self) -> Result<BigInt> {
        self.inner.homogeneous_y()
    }

    /// The affine pair `(x, y)`.
    pub fn to_affine(&self) -> Result<(BigInt, BigInt)> {
        self.inner.to_affine()
    }

    /// The inverse point `(x, -y)`; infinity is its own inverse.
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return Self::infinity(self.context());
        }
        Self {
            inner: self.inner.mirrored(),
        }
    }

    /// Third intersection of the curve with the line through `self` and
    /// `other`: the chord for distinct points, the tangent when they are
    /// equal.
    ///
    /// A line through infinity is vertical, so pairing with infinity yields
    /// the mirror image of the other point, and a vertical chord yields
    /// infinity. The tangent at a point with `y = 0` is vertical as well, but
    /// its slope is a division by zero and is reported as `DivisionByZero`.
    pub fn chord_or_tangent(&self, other: &Self) -> Result<Self> {
        validate::same_curve(self.inner.same_curve(&other.inner))?;
        if self.is_infinity() {
            return Ok(other.negate());
        }
        if other.is_infinity() {
            return Ok(self.negate());
        }

        let ctx = self.context();
        let p = ctx.modulus();
        let (x, y) = self.to_affine()?;

        if self == other {
            if y.is_zero() {
                tracing::trace!(point=%self, "Tangent at a point of order two");
            }
            let slope = divide(&(&x * &x * 3u32 + ctx.a()), &(&y * 2u32), p)?;
            let k = &slope * &slope - &x * 2u32;
            return Self::on_line(ctx, &slope, k, &x, &y);
        }

        let (other_x, other_y) = other.to_affine()?;
        if x == other_x {
            return Ok(Self::infinity(ctx));
        }
        let slope = divide(&(&other_y - &y), &(&other_x - &x), p)?;
        let k = &slope * &slope - &x - &other_x;
        Self::on_line(ctx, &slope, k, &x, &y)
    }

    /// The point with abscissa `k` on the line of slope `slope` through
    /// `(x, y)`.
    fn on_line(
        ctx: &'c CurveContext,
        slope: &BigInt,
        k: BigInt,
        x: &BigInt,
        y: &BigInt,
    ) -> Result<Self> {
        let ordinate = slope * (&k - x) + y;
        Self::from_affine(ctx, k, ordinate)
    }

    /// Group addition.
    ///
    /// The chord-and-tangent step lands on the third intersection point,
    /// which is the mirror image of the sum; a second step through infinity
    /// mirrors it back.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let third = self.chord_or_tangent(other)?;
        Self::infinity(self.context()).chord_or_tangent(&third)
    }

    /// Group subtraction, `self + (-other)`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.add(&other.negate())
    }

    /// `self + self`. Fails with `DivisionByZero` on points of order two.
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Scalar multiplication `n · self`, by left-to-right double-and-add.
    ///
    /// `0 · P` is infinity and a negative scalar multiplies the inverse point.
    /// Agrees with repeated addition `P + (n - 1) · P`: for `n >= 2` it fails
    /// with `DivisionByZero` exactly when `self` has order two, and
    /// intermediate multiples of order two never cause a failure.
    pub fn scalar_multiply(&self, n: impl Into<BigInt>) -> Result<Self> {
        let n = n.into();
        if n.is_zero() {
            return Ok(Self::infinity(self.context()));
        }
        if n.is_negative() {
            return self.negate().scalar_multiply(-n);
        }
        if n.is_one() {
            return Ok(self.clone());
        }
        if self.has_order_two() {
            tracing::trace!(point=%self, "Tangent at a point of order two");
            return Err(Error::division_by_zero(self.context().modulus()));
        }

        let (_, bits) = n.to_radix_be(2);
        tracing::trace!(point=%self, bits=bits.len(), "Scalar multiplication");
        let mut acc = Self::infinity(self.context());
        for bit in bits {
            // 2Q = O when Q has order two
            acc = if acc.has_order_two() {
                Self::infinity(self.context())
            } else {
                acc.double()?
            };
            if bit == 1 {
                acc = acc.add(self)?;
            }
        }
        Ok(acc)
    }

    /// A finite point with `y = 0`, where the tangent is vertical.
    fn has_order_two(&self) -> bool {
        !self.is_infinity() && self.inner.y().is_zero()
    }
}

impl<'c> TryFrom<ProjectivePoint<'c>> for CurvePoint<'c> {
    type Error = Error;

    fn try_from(point: ProjectivePoint<'c>) -> Result<Self> {
        let ctx = point.context();
        if !point.belongs_to(ctx.a(), ctx.b()) {
            tracing::debug!(%point, curve=%ctx, "Rejected point off the curve");
            return Err(Error::PointNotOnCurve {
                x: point.x().clone(),
                y: point.y().clone(),
                z: point.z().clone(),
                a: ctx.a().clone(),
                b: ctx.b().clone(),
            });
        }
        Ok(Self { inner: point })
    }
}

impl<'c> From<CurvePoint<'c>> for ProjectivePoint<'c> {
    fn from(point: CurvePoint<'c>) -> Self {
        point.inner
    }
}

impl<'c> Neg for CurvePoint<'c> {
    type Output = CurvePoint<'c>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> Neg for &CurvePoint<'c> {
    type Output = CurvePoint<'c>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for CurvePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            return write!(f, "O");
        }
        match self.to_affine() {
            Ok((x, y)) => write!(f, "({}, {})", x, y),
            Err(_) => fmt::Display::fmt(&self.inner, f),
        }
    }
}
