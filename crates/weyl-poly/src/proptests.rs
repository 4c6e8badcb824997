//! Randomized laws for dense polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{poly_div_rem, poly_extended_gcd, poly_gcd};
    use crate::dense::DensePoly;
    use weyl_rings::rationals::Q;
    use weyl_rings::traits::Ring;

    fn coeff() -> impl Strategy<Value = Q> {
        (-60i64..60i64).prop_map(Q::from_integer)
    }

    fn poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(coeff(), 1..=6).prop_map(DensePoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = DensePoly<Q>> {
        poly().prop_filter("non-zero polynomial", |p| !p.is_zero())
    }

    // Shift-and-add product, independent of the dispatch in `mul`.
    fn reference_mul(a: &DensePoly<Q>, b: &DensePoly<Q>) -> DensePoly<Q> {
        let mut acc = vec![Q::zero(); a.coeffs().len() + b.coeffs().len() - 1];
        for (i, ai) in a.coeffs().iter().enumerate() {
            for (j, bj) in b.coeffs().iter().enumerate() {
                acc[i + j] = acc[i + j].clone() + ai.clone() * bj.clone();
            }
        }
        DensePoly::new(acc)
    }

    proptest! {
        #[test]
        fn appended_zeros_change_nothing(coeffs in proptest::collection::vec(coeff(), 1..=6)) {
            let mut padded = coeffs.clone();
            padded.push(Q::zero());
            padded.push(Q::zero());
            prop_assert_eq!(DensePoly::new(coeffs), DensePoly::new(padded));
        }

        #[test]
        fn addition_commutes(a in poly(), b in poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn multiplication_commutes(a in poly(), b in poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn multiplication_associates(a in poly(), b in poly(), c in poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn multiplication_distributes(a in poly(), b in poly(), c in poly()) {
            prop_assert_eq!(
                a.mul(&b.add(&c)),
                a.mul(&b).add(&a.mul(&c))
            );
        }

        #[test]
        fn negation_cancels(a in poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn product_degrees_add(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn sum_degree_is_bounded(a in poly(), b in poly()) {
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        #[test]
        fn evaluation_is_a_ring_map(a in poly(), b in poly(), x in coeff()) {
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn derivative_is_linear(a in poly(), b in poly()) {
            prop_assert_eq!(
                a.add(&b).derivative(),
                a.derivative().add(&b.derivative())
            );
        }

        #[test]
        fn derivative_satisfies_leibniz(a in poly(), b in poly()) {
            prop_assert_eq!(
                a.mul(&b).derivative(),
                a.derivative().mul(&b).add(&a.mul(&b.derivative()))
            );
        }

        #[test]
        fn division_recombines(a in poly(), b in nonzero_poly()) {
            let (q, r) = poly_div_rem(&a, &b);
            prop_assert_eq!(b.mul(&q).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_is_a_monic_common_divisor(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            prop_assert!(g.leading_coeff().is_one());
            prop_assert!(poly_div_rem(&a, &g).1.is_zero());
            prop_assert!(poly_div_rem(&b, &g).1.is_zero());
        }

        #[test]
        fn extended_gcd_satisfies_bezout(a in poly(), b in poly()) {
            let (g, s, t) = poly_extended_gcd(&a, &b);
            prop_assert_eq!(s.mul(&a).add(&t.mul(&b)), g);
        }

        #[test]
        fn pow_is_iterated_multiplication(a in poly(), n in 0u32..5) {
            let mut expected = DensePoly::one();
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn products_agree_across_the_cutoff(
            a_coeffs in proptest::collection::vec(-10i64..10i64, 33..=40),
            b_coeffs in proptest::collection::vec(-10i64..10i64, 33..=40)
        ) {
            let a = DensePoly::new(a_coeffs.into_iter().map(Q::from_integer).collect());
            let b = DensePoly::new(b_coeffs.into_iter().map(Q::from_integer).collect());
            prop_assert_eq!(a.mul(&b), reference_mul(&a, &b));
        }
    }
}
