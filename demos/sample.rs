//! Walks through a small curve over F₇: checks that it is non-singular,
//! builds a point and combines scalar multiplication with addition.
//!
//! Run with `RUST_LOG=trace cargo run --example sample` to see the
//! arithmetic as it happens.

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use weierstrass::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ctx = CurveContext::new(7, 2, 1).context("creating the curve context")?;
    println!("Modulus: {}", ctx.modulus());
    println!("Curve: {}", ctx);

    if ctx.is_singular() {
        bail!("curve {} is singular", ctx);
    }
    println!("Discriminant 4a^3 + 27b^2 = {} (non-singular)", ctx.discriminant());

    let p = CurvePoint::from_affine(&ctx, 1, 2).context("building P")?;
    println!("P = {}", p);

    let q = p
        .scalar_multiply(3)?
        .scalar_multiply(6)?
        .add(&p)
        .context("computing P * 3 * 6 + P")?;
    println!("Q = P * 3 * 6 + P = {}", q);
    println!(
        "Q affine: x = {}, y = {}",
        q.homogeneous_x()?,
        q.homogeneous_y()?
    );

    Ok(())
}
