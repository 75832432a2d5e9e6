//! Modular arithmetic in Z/pZ
//!
//! Every function takes the modulus `p` as an explicit argument. Inputs may be
//! any integer, negative ones included; they are reduced into `[0, p)` before
//! use.
//!
//! Inversion relies on Fermat's little theorem, so `p` must be prime. This is
//! a precondition of the whole crate and is never checked at runtime: with a
//! composite modulus the results are meaningless.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use weierstrass_api::{validate, Result};

/// Reduce `n` into `[0, p)`.
///
/// # Panics
///
/// Panics if `p` is zero.
pub fn normalize(n: &BigInt, p: &BigInt) -> BigInt {
    n.mod_floor(p)
}

/// Compute `x^y mod p` by recursive halving of the exponent.
///
/// A negative exponent is first brought into the non-negative domain by
/// reduction modulo `p - 1`, which matches `x^y` whenever `x` is invertible.
/// The base case `y = 0` yields 1 for every `x`.
pub fn power_mod(x: &BigInt, y: &BigInt, p: &BigInt) -> BigInt {
    let x = normalize(x, p);
    let y = if y.is_negative() {
        y.mod_floor(&(p - 1u32))
    } else {
        y.clone()
    };
    square_and_multiply(&x, &y, p)
}

fn square_and_multiply(x: &BigInt, y: &BigInt, p: &BigInt) -> BigInt {
    if y.is_zero() {
        return BigInt::one();
    }

    let half = square_and_multiply(x, &(y >> 1u32), p);
    let square = (&half * &half).mod_floor(p);
    if y.is_even() {
        square
    } else {
        (x * square).mod_floor(p)
    }
}

/// Compute the multiplicative inverse of `n` in Z/pZ as `n^(p-2)`.
///
/// Returns `DivisionByZero` when `n ≡ 0 (mod p)`.
pub fn inverse(n: &BigInt, p: &BigInt) -> Result<BigInt> {
    let n = normalize(n, p);
    validate::divisor(&n, p)?;
    if n.is_one() {
        return Ok(n);
    }
    Ok(power_mod(&n, &(p - 2u32), p))
}

/// Compute `n / q` in Z/pZ.
///
/// Returns `DivisionByZero` when `q ≡ 0 (mod p)`.
pub fn divide(n: &BigInt, q: &BigInt, p: &BigInt) -> Result<BigInt> {
    let q_inv = inverse(q, p)?;
    Ok(normalize(&(n * q_inv), p))
}
