//! Validation utilities for field and curve operations

use super::{Error, Result};
use num_bigint::BigInt;
use num_traits::Zero;

/// Validate that a modulus can carry a curve (p > 2).
///
/// Primality is a caller precondition and is not checked here.
#[inline]
pub fn modulus(p: &BigInt) -> Result<()> {
    if *p <= BigInt::from(2) {
        return Err(Error::InvalidModulus { modulus: p.clone() });
    }
    Ok(())
}

/// Validate that an already-normalized divisor is nonzero.
#[inline]
pub fn divisor(reduced: &BigInt, p: &BigInt) -> Result<()> {
    if reduced.is_zero() {
        return Err(Error::division_by_zero(p));
    }
    Ok(())
}

/// Validate that a normalized coordinate triple is not `(0, 0, 0)`.
#[inline]
pub fn projective(x: &BigInt, y: &BigInt, z: &BigInt) -> Result<()> {
    if x.is_zero() && y.is_zero() && z.is_zero() {
        return Err(Error::DegenerateProjection);
    }
    Ok(())
}

/// Validate that two operands were built on the same curve.
#[inline]
pub fn same_curve(same: bool) -> Result<()> {
    if !same {
        return Err(Error::CurveMismatch);
    }
    Ok(())
}
