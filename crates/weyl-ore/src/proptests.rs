//! Property-based tests for the skew operator arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::operator::DiffOp;
    use crate::{RationalOperator, WeylOperator};
    use weyl_poly::DensePoly;
    use weyl_rational_func::RationalFunction;
    use weyl_rings::rationals::Q;
    use weyl_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-10i64..10i64).prop_map(Q::from_integer)
    }

    // Polynomials of degree 0-2
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=3).prop_map(DensePoly::new)
    }

    // Operators of order 0-2 with polynomial coefficients
    fn small_op() -> impl Strategy<Value = WeylOperator> {
        proptest::collection::vec(small_poly(), 1..=3).prop_map(DiffOp::new)
    }

    // Rational-function coefficients with denominators from a fixed
    // nonzero set, so division chains stay exact and small
    fn small_rational_func() -> impl Strategy<Value = RationalFunction<Q>> {
        (small_poly(), 0usize..3).prop_map(|(num, pick)| {
            let den = match pick {
                0 => DensePoly::one(),
                1 => DensePoly::z(),
                _ => DensePoly::new(vec![Q::one(), Q::one()]),
            };
            RationalFunction::new(num, den)
        })
    }

    fn small_rational_op() -> impl Strategy<Value = RationalOperator> {
        proptest::collection::vec(small_rational_func(), 1..=3).prop_map(DiffOp::new)
    }

    fn nonzero_rational_op() -> impl Strategy<Value = RationalOperator> {
        small_rational_op().prop_filter("operator must be non-zero", |a| !a.is_zero())
    }

    proptest! {
        // Ring axioms of the skew algebra

        #[test]
        fn op_add_commutative(a in small_op(), b in small_op()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn op_add_associative(a in small_op(), b in small_op(), c in small_op()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn op_mul_associative(a in small_op(), b in small_op(), c in small_op()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn op_mul_distributive(a in small_op(), b in small_op(), c in small_op()) {
            // both sides, since the product does not commute
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
            prop_assert_eq!(b.add(&c).mul(&a), b.mul(&a).add(&c.mul(&a)));
        }

        #[test]
        fn op_mul_identity(a in small_op()) {
            let one = WeylOperator::one();
            prop_assert_eq!(one.mul(&a), a.clone());
            prop_assert_eq!(a.mul(&one), a);
        }

        #[test]
        fn op_pow_matches_repeated_mul(a in small_op(), n in 0u32..4) {
            let mut expected = WeylOperator::one();
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        // The defining commutation rule

        #[test]
        fn op_commutation_rule(p in small_poly()) {
            // Dz·p - p·Dz = p'
            let dz = WeylOperator::dz();
            let cp = WeylOperator::constant(p.clone());
            let commutator = dz.mul(&cp).sub(&cp.mul(&dz));
            prop_assert_eq!(commutator, WeylOperator::constant(p.derivative()));
        }

        // Adjoint laws

        #[test]
        fn adjoint_involution(a in small_op()) {
            prop_assert_eq!(a.adjoint().adjoint(), a);
        }

        #[test]
        fn adjoint_antihomomorphism(a in small_op(), b in small_op()) {
            // (a·b)* = b*·a*
            prop_assert_eq!(a.mul(&b).adjoint(), b.adjoint().mul(&a.adjoint()));
        }

        // Application is a module action

        #[test]
        fn apply_composition(a in small_op(), b in small_op(), f in small_poly()) {
            // (a·b)(f) = a(b(f))
            prop_assert_eq!(a.mul(&b).apply(&f), a.apply(&b.apply(&f)));
        }

        #[test]
        fn apply_linearity(a in small_op(), f in small_poly(), g in small_poly()) {
            prop_assert_eq!(a.apply(&f.add(&g)), a.apply(&f).add(&a.apply(&g)));
        }

        // Right division laws over the rational function field

        #[test]
        fn right_division_identity(a in small_rational_op(), b in nonzero_rational_op()) {
            let (q, r) = a.right_div_rem(&b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.order() < b.order());
        }

        #[test]
        fn gcrd_divides_both(a in nonzero_rational_op(), b in nonzero_rational_op()) {
            let g = a.gcrd(&b);
            prop_assert!(g.leading_coefficient().is_one());
            prop_assert!(a.right_rem(&g).is_zero());
            prop_assert!(b.right_rem(&g).is_zero());
        }

        #[test]
        fn lclm_divisible_by_both(a in nonzero_rational_op(), b in nonzero_rational_op()) {
            let m = a.lclm(&b);
            prop_assert!(m.right_rem(&a).is_zero());
            prop_assert!(m.right_rem(&b).is_zero());
        }

        #[test]
        fn lclm_order_formula(a in nonzero_rational_op(), b in nonzero_rational_op()) {
            // ord lclm = ord a + ord b - ord gcrd
            let m = a.lclm(&b);
            let g = a.gcrd(&b);
            let expected = a.order().unwrap() + b.order().unwrap() - g.order().unwrap();
            prop_assert_eq!(m.order(), Some(expected));
        }
    }
}
