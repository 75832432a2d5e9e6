//! Scalar multiplication laws

use num_bigint::BigInt;
use proptest::prelude::*;
use weierstrass_algorithms::CurvePoint;
use weierstrass_tests::{all_points, curves};

/// Every multiple up to the group order, on a curve of order 100 with three
/// points of order two, so doubling chains pass through them.
#[test]
fn agrees_with_repeated_addition_on_even_order_curve() {
    let ctx = curves::f97();
    let points = all_points(&ctx);
    assert_eq!(points.len(), 100);

    for p in &points {
        let order_two = !p.is_infinity() && p.homogeneous_y().unwrap() == BigInt::from(0);
        let mut expected: weierstrass_algorithms::Result<CurvePoint<'_>> = Ok(CurvePoint::infinity(&ctx));
        for n in 0..=100 {
            let actual = p.scalar_multiply(n);
            assert_eq!(actual, expected, "{} * {}", n, p);
            if !order_two {
                assert!(actual.is_ok(), "{} * {} failed", n, p);
            }
            expected = expected.and_then(|acc| p.add(&acc));
        }
    }
}

#[test]
fn secp256k1_generator_order() {
    let ctx = curves::secp256k1();
    let g = curves::secp256k1_generator(&ctx);
    let n = curves::secp256k1_order();

    assert!(g.scalar_multiply(n.clone()).unwrap().is_infinity());
    assert_eq!(g.scalar_multiply(&n + 1u32).unwrap(), g);
    assert_eq!(g.scalar_multiply(-(&n - 1u32)).unwrap(), g);
}

#[test]
fn secp256k1_distributes_over_scalar_sum() {
    let ctx = curves::secp256k1();
    let g = curves::secp256k1_generator(&ctx);
    let a = BigInt::parse_bytes(b"1f3a9c0d77e5b2184a6c", 16).unwrap();
    let b = BigInt::parse_bytes(b"08d1e2f3a4b5c6d7e8f9", 16).unwrap();

    let left = g.scalar_multiply(&a + &b).unwrap();
    let right = g
        .scalar_multiply(a)
        .unwrap()
        .add(&g.scalar_multiply(b).unwrap())
        .unwrap();
    assert_eq!(left, right);
}

proptest! {
    #[test]
    fn zero_and_one(k in any::<i32>()) {
        let ctx = curves::f1009();
        let p = curves::f1009_base(&ctx).scalar_multiply(k).unwrap();

        prop_assert_eq!(p.scalar_multiply(0).unwrap(), CurvePoint::infinity(&ctx));
        prop_assert_eq!(p.scalar_multiply(1).unwrap(), p);
    }

    #[test]
    fn negative_scalars_negate_first(n in any::<i64>()) {
        let ctx = curves::f1009();
        let p = curves::f1009_base(&ctx);

        let negated = p.negate().scalar_multiply(n).unwrap();
        prop_assert_eq!(p.scalar_multiply(-BigInt::from(n)).unwrap(), negated.clone());
        prop_assert_eq!(p.scalar_multiply(n).unwrap().negate(), negated);
    }

    #[test]
    fn matches_repeated_addition(n in 0u32..200) {
        let ctx = curves::f1009();
        let p = curves::f1009_base(&ctx);

        let mut expected = CurvePoint::infinity(&ctx);
        for _ in 0..n {
            expected = p.add(&expected).unwrap();
        }
        prop_assert_eq!(p.scalar_multiply(n).unwrap(), expected);
    }

    #[test]
    fn scalars_compose(a in any::<i32>(), b in any::<i32>()) {
        let ctx = curves::f1009();
        let p = curves::f1009_base(&ctx);
        let (a, b) = (BigInt::from(a), BigInt::from(b));

        let sum = p.scalar_multiply(&a + &b).unwrap();
        let added = p.scalar_multiply(a.clone()).unwrap().add(&p.scalar_multiply(b.clone()).unwrap()).unwrap();
        prop_assert_eq!(sum, added);

        let nested = p.scalar_multiply(a.clone()).unwrap().scalar_multiply(b.clone()).unwrap();
        prop_assert_eq!(nested, p.scalar_multiply(a * b).unwrap());
    }
}
