//! Group axioms of the chord-and-tangent law

use proptest::prelude::*;
use weierstrass_algorithms::{CurveContext, CurvePoint};
use weierstrass_tests::{all_points, curves};

fn check_axioms_exhaustively(ctx: &CurveContext) {
    let points = all_points(ctx);
    let inf = CurvePoint::infinity(ctx);

    for p in &points {
        assert_eq!(p.add(&inf).unwrap(), *p, "P + O = P for {}", p);
        assert_eq!(inf.add(p).unwrap(), *p, "O + P = P for {}", p);
        assert_eq!(p.add(&p.negate()).unwrap(), inf, "P + (-P) = O for {}", p);
        assert_eq!(p.subtract(p).unwrap(), inf, "P - P = O for {}", p);

        for q in &points {
            let pq = p.add(q).unwrap();
            assert_eq!(pq, q.add(p).unwrap(), "P + Q = Q + P for {}, {}", p, q);
            assert!(points.contains(&pq), "{} + {} left the curve", p, q);

            for r in &points {
                assert_eq!(
                    pq.add(r).unwrap(),
                    p.add(&q.add(r).unwrap()).unwrap(),
                    "(P + Q) + R = P + (Q + R) for {}, {}, {}",
                    p,
                    q,
                    r
                );
            }
        }
    }
}

#[test]
fn group_axioms_over_f7() {
    let ctx = curves::f7();
    assert_eq!(all_points(&ctx).len(), 5);
    check_axioms_exhaustively(&ctx);
}

#[test]
fn group_axioms_over_f17() {
    let ctx = curves::f17();
    assert_eq!(all_points(&ctx).len(), 19);
    check_axioms_exhaustively(&ctx);
}

#[test]
fn group_order_divides_into_multiples() {
    let ctx = curves::f17();
    for p in all_points(&ctx) {
        assert!(p.scalar_multiply(19).unwrap().is_infinity(), "19 * {} = O", p);
    }
}

proptest! {
    #[test]
    fn identity_and_inverse(k in any::<i32>()) {
        let ctx = curves::f1009();
        let p = curves::f1009_base(&ctx).scalar_multiply(k).unwrap();
        let inf = CurvePoint::infinity(&ctx);

        prop_assert_eq!(p.add(&inf).unwrap(), p.clone());
        prop_assert_eq!(p.add(&p.negate()).unwrap(), inf);
    }

    #[test]
    fn commutativity(j in any::<i32>(), k in any::<i32>()) {
        let ctx = curves::f1009();
        let g = curves::f1009_base(&ctx);
        let p = g.scalar_multiply(j).unwrap();
        let q = g.scalar_multiply(k).unwrap();

        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn associativity(i in any::<i32>(), j in any::<i32>(), k in any::<i32>()) {
        let ctx = curves::f1009();
        let g = curves::f1009_base(&ctx);
        let p = g.scalar_multiply(i).unwrap();
        let q = g.scalar_multiply(j).unwrap();
        let r = g.scalar_multiply(k).unwrap();

        let left = p.add(&q).unwrap().add(&r).unwrap();
        let right = p.add(&q.add(&r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn membership_matches_curve_equation(x in -2000i64..2000, y in -2000i64..2000) {
        let ctx = curves::f97();
        let lhs = (y * y).rem_euclid(97);
        let rhs = (x * x * x + 2 * x + 3).rem_euclid(97);

        match CurvePoint::from_affine(&ctx, x, y) {
            Ok(point) => {
                prop_assert_eq!(lhs, rhs);
                prop_assert!(point.as_projective().belongs_to(ctx.a(), ctx.b()));
            }
            Err(err) => {
                prop_assert_ne!(lhs, rhs);
                let is_off_curve = matches!(err, weierstrass_api::Error::PointNotOnCurve { .. });
                prop_assert!(is_off_curve);
            }
        }
    }
}
