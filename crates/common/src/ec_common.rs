//! Curve parameters in short Weierstrass form: y² = x³ + ax + b over Z/pZ

use core::fmt;

use num_bigint::BigInt;
use num_traits::Zero;
use weierstrass_api::{validate, Result};

use crate::math_common::normalize;

/// The field modulus and curve coefficients every point is checked against.
///
/// A context is an ordinary value: points borrow the context they were built
/// on, so several curves can be used side by side and from several threads
/// at once. While any point borrows a context, the context cannot be mutated.
///
/// The modulus must be prime; this is not checked. Non-singularity
/// (`4a³ + 27b² ≠ 0 mod p`) is not enforced either, but can be inspected with
/// [`CurveContext::is_singular`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurveContext {
    p: BigInt,
    a: BigInt,
    b: BigInt,
}

impl CurveContext {
    /// Create a context for the curve `y² = x³ + ax + b` over Z/pZ.
    ///
    /// Returns `InvalidModulus` if `p <= 2`. The coefficients are reduced
    /// modulo `p`.
    pub fn new(
        p: impl Into<BigInt>,
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
    ) -> Result<Self> {
        let p = p.into();
        validate::modulus(&p)?;
        let a = normalize(&a.into(), &p);
        let b = normalize(&b.into(), &p);
        tracing::debug!(modulus=%p, %a, %b, "Created curve context");
        Ok(Self { p, a, b })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// The coefficient `a`, in `[0, p)`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The coefficient `b`, in `[0, p)`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Replace the field modulus.
    ///
    /// The stored coefficients are reduced again modulo the new `p`; they are
    /// not re-derived from the values originally passed in.
    pub fn set_modulus(&mut self, p: impl Into<BigInt>) -> Result<()> {
        let p = p.into();
        validate::modulus(&p)?;
        self.a = normalize(&self.a, &p);
        self.b = normalize(&self.b, &p);
        self.p = p;
        tracing::debug!(modulus=%self.p, a=%self.a, b=%self.b, "Changed curve modulus");
        Ok(())
    }

    /// Replace the coefficient `a`.
    pub fn set_a(&mut self, a: impl Into<BigInt>) {
        self.a = normalize(&a.into(), &self.p);
        tracing::debug!(a=%self.a, "Changed curve coefficient");
    }

    /// Replace the coefficient `b`.
    pub fn set_b(&mut self, b: impl Into<BigInt>) {
        self.b = normalize(&b.into(), &self.p);
        tracing::debug!(b=%self.b, "Changed curve coefficient");
    }

    /// Reduce `n` modulo this context's field modulus.
    pub fn normalize(&self, n: &BigInt) -> BigInt {
        normalize(n, &self.p)
    }

    /// `4a³ + 27b² mod p`.
    pub fn discriminant(&self) -> BigInt {
        let a_cubed = &self.a * &self.a * &self.a;
        let b_squared = &self.b * &self.b;
        self.normalize(&(a_cubed * 4u32 + b_squared * 27u32))
    }

    /// Whether the curve is singular, i.e. its discriminant vanishes.
    pub fn is_singular(&self) -> bool {
        self.discriminant().is_zero()
    }
}

impl fmt::Display for CurveContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {} mod {}", self.a, self.b, self.p)
    }
}
