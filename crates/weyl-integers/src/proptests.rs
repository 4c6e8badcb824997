//! Randomized checks for the integer and rational wrappers.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn coeff() -> impl Strategy<Value = i64> {
        -720i64..720i64
    }

    fn nonzero_coeff() -> impl Strategy<Value = i64> {
        prop_oneof![(-720i64..=-1i64), (1i64..=720i64)]
    }

    proptest! {
        #[test]
        fn integer_sub_is_anticommutative(a in coeff(), b in coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() - b.clone(), -(b - a));
        }

        #[test]
        fn integer_mul_distributes_over_add(a in coeff(), b in coeff(), c in coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_division_identity(a in coeff(), b in nonzero_coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.clone() / b.clone();
            let r = a.clone() % b.clone();
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn gcd_divides_both_arguments(a in nonzero_coeff(), b in nonzero_coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn lcm_is_a_common_multiple(a in nonzero_coeff(), b in nonzero_coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let m = a.lcm(&b);
            prop_assert!((m.clone() % a).is_zero());
            prop_assert!((m % b).is_zero());
        }

        #[test]
        fn gcd_lcm_product(a in nonzero_coeff(), b in nonzero_coeff()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (a * b).abs());
        }

        #[test]
        fn rational_reduction_is_canonical(n in coeff(), d in nonzero_coeff()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
        }

        #[test]
        fn rational_sign_lives_on_the_numerator(n in coeff(), d in nonzero_coeff()) {
            let r = Rational::from_i64(n, d);
            prop_assert_eq!(r.is_negative(), r.numerator().is_negative());
        }

        #[test]
        fn rational_add_is_associative(
            (na, da) in (coeff(), nonzero_coeff()),
            (nb, db) in (coeff(), nonzero_coeff()),
            (nc, dc) in (coeff(), nonzero_coeff())
        ) {
            let a = Rational::from_i64(na, da);
            let b = Rational::from_i64(nb, db);
            let c = Rational::from_i64(nc, dc);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn rational_mul_distributes(
            (na, da) in (coeff(), nonzero_coeff()),
            (nb, db) in (coeff(), nonzero_coeff()),
            (nc, dc) in (coeff(), nonzero_coeff())
        ) {
            let a = Rational::from_i64(na, da);
            let b = Rational::from_i64(nb, db);
            let c = Rational::from_i64(nc, dc);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn reciprocal_is_an_inverse(n in nonzero_coeff(), d in nonzero_coeff()) {
            let r = Rational::from_i64(n, d);
            prop_assert!((r.clone() * r.recip()).is_one());
        }

        #[test]
        fn double_negation_roundtrips(n in coeff(), d in nonzero_coeff()) {
            let r = Rational::from_i64(n, d);
            prop_assert_eq!(-(-r.clone()), r);
        }
    }
}
