//! Euclidean division and GCDs for polynomials over a field.
//!
//! These routines back the `EuclideanDomain` impl on `DensePoly` and
//! the reduction of rational functions to lowest terms.

use weyl_rings::traits::Field;

use crate::dense::DensePoly;

/// Divides `a` by `b`, returning `(quotient, remainder)` with the
/// remainder of strictly smaller degree than `b`.
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.is_zero() || a.degree() < b.degree() {
        return (DensePoly::zero(), a.clone());
    }

    let lead_inv = b
        .leading_coeff()
        .inv()
        .expect("non-zero divisor has an invertible leading coefficient");
    let d = b.degree();
    let mut rem = a.coeffs().to_vec();
    let mut quo = vec![F::zero(); a.degree() - d + 1];

    // synthetic division, clearing one leading position per step
    for k in (d..rem.len()).rev() {
        let q = rem[k].clone() * lead_inv.clone();
        if q.is_zero() {
            continue;
        }
        quo[k - d] = q.clone();
        for (j, bc) in b.coeffs().iter().enumerate() {
            rem[k - d + j] = rem[k - d + j].clone() - q.clone() * bc.clone();
        }
    }

    rem.truncate(d.max(1));
    (DensePoly::new(quo), DensePoly::new(rem))
}

/// The monic greatest common divisor of two polynomials.
///
/// `poly_gcd(0, b)` is the monic multiple of `b`, and the GCD of two
/// zero polynomials is zero.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let (mut p, mut q) = (a.clone(), b.clone());
    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = std::mem::replace(&mut q, r);
    }
    make_monic(&p)
}

/// Scales a polynomial so its leading coefficient is one.
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    if p.is_zero() {
        return p.clone();
    }
    let lead_inv = p
        .leading_coeff()
        .inv()
        .expect("non-zero polynomial has an invertible leading coefficient");
    p.scale(&lead_inv)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `g = s*a + t*b` and `g` monic.
pub fn poly_extended_gcd<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> (DensePoly<F>, DensePoly<F>, DensePoly<F>) {
    if a.is_zero() && b.is_zero() {
        return (DensePoly::zero(), DensePoly::one(), DensePoly::zero());
    }

    let mut r0 = a.clone();
    let mut r1 = b.clone();
    let mut s0 = DensePoly::one();
    let mut s1 = DensePoly::zero();
    let mut t0 = DensePoly::zero();
    let mut t1 = DensePoly::one();

    while !r1.is_zero() {
        let (q, r2) = poly_div_rem(&r0, &r1);
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = s0.sub(&q.mul(&s1));
        s0 = std::mem::replace(&mut s1, s2);
        let t2 = t0.sub(&q.mul(&t1));
        t0 = std::mem::replace(&mut t1, t2);
    }

    let lead_inv = r0
        .leading_coeff()
        .inv()
        .expect("gcd of inputs that are not both zero is non-zero");
    (r0.scale(&lead_inv), s0.scale(&lead_inv), t0.scale(&lead_inv))
}
