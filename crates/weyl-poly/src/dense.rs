//! Dense univariate polynomials in the variable z.

use weyl_rings::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// Products above this size go through Karatsuba.
const KARATSUBA_CUTOFF: usize = 32;

/// A dense univariate polynomial in z over a ring `R`.
///
/// The coefficient vector runs from the constant term upward and never
/// ends in a zero, except that the zero polynomial is stored as a
/// single zero coefficient. Every constructor restores this form, so
/// derived equality is structural equality of values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Builds a polynomial from coefficients in ascending degree order,
    /// trimming trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(R::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial z itself.
    #[must_use]
    pub fn z() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// The monomial `c * z^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// The degree, with the zero polynomial counted as degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// The coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        self.coeffs.last().expect("coefficient vector is never empty")
    }

    /// The coefficient of `z^i`, zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// All coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates at a point by Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = longer.coeffs.clone();
        for (r, c) in result.iter_mut().zip(&shorter.coeffs) {
            *r = r.clone() + c.clone();
        }
        Self::new(result)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Small products use the schoolbook loop; larger ones switch to
    /// Karatsuba.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.coeffs.len().min(other.coeffs.len()) < KARATSUBA_CUTOFF {
            self.mul_schoolbook(other)
        } else {
            self.mul_karatsuba(other)
        }
    }

    fn mul_schoolbook(&self, other: &Self) -> Self {
        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            // stored operator tables are sparse, skipping zero rows pays off
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(result)
    }

    fn mul_karatsuba(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        if n.min(m) < KARATSUBA_CUTOFF {
            return self.mul_schoolbook(other);
        }

        // a = a0 + a1*z^half, b = b0 + b1*z^half
        let half = n.max(m) / 2;
        let (a0, a1) = self.split(half);
        let (b0, b1) = other.split(half);

        let low = a0.mul_karatsuba(&b0);
        let high = a1.mul_karatsuba(&b1);
        let mixed = a0
            .add(&a1)
            .mul_karatsuba(&b0.add(&b1))
            .sub(&low)
            .sub(&high);

        let mut result = vec![R::zero(); n + m - 1];
        for (i, c) in low.coeffs.iter().enumerate() {
            result[i] = result[i].clone() + c.clone();
        }
        for (i, c) in mixed.coeffs.iter().enumerate() {
            result[i + half] = result[i + half].clone() + c.clone();
        }
        for (i, c) in high.coeffs.iter().enumerate() {
            result[i + 2 * half] = result[i + 2 * half].clone() + c.clone();
        }
        Self::new(result)
    }

    /// Splits into (terms below z^at, terms from z^at up, shifted down).
    fn split(&self, at: usize) -> (Self, Self) {
        if self.coeffs.len() <= at {
            (self.clone(), Self::zero())
        } else {
            let (lo, hi) = self.coeffs.split_at(at);
            (Self::new(lo.to_vec()), Self::new(hi.to_vec()))
        }
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// The formal derivative with respect to z.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let scaled = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();
        Self::new(scaled)
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut sq = self.clone();
        let mut e = n;
        while e > 0 {
            if e % 2 == 1 {
                acc = acc.mul(&sq);
            }
            sq = sq.mul(&sq);
            e /= 2;
        }
        acc
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*z")?,
                _ => write!(f, "{c}*z^{i}")?,
            }
            first = false;
        }
        Ok(())
    }
}

impl<R: CommutativeRing> Ring for DensePoly<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl<R: CommutativeRing> std::ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: CommutativeRing> std::ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {}

impl<F: Field> EuclideanDomain for DensePoly<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        crate::algorithms::gcd::poly_div_rem(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::algorithms::gcd::poly_gcd(self, other)
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        crate::algorithms::gcd::poly_extended_gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weyl_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&c| Q::from(c)).collect())
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let p = poly(&[5, 0, 3, 0, 0]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p, poly(&[5, 0, 3]));

        let zero = poly(&[0, 0, 0]);
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), 0);
    }

    #[test]
    fn addition_handles_unequal_lengths() {
        let short = poly(&[1, 2]);
        let long = poly(&[3, 0, 0, 7]);

        let sum = short.add(&long);
        assert_eq!(sum, poly(&[4, 2, 0, 7]));
        assert_eq!(long.add(&short), sum);

        // cancellation drops the degree
        let diff = poly(&[1, 1]).sub(&poly(&[0, 1]));
        assert_eq!(diff.degree(), 0);
    }

    #[test]
    fn schoolbook_product() {
        // (1 + 2z)(3 + 4z) = 3 + 10z + 8z^2
        let prod = poly(&[1, 2]).mul(&poly(&[3, 4]));
        assert_eq!(prod, poly(&[3, 10, 8]));

        // sparse row from a catalogued operator
        let sparse = poly(&[0, 0, 4]).mul(&poly(&[0, -1]));
        assert_eq!(sparse, poly(&[0, 0, 0, -4]));
    }

    #[test]
    fn karatsuba_agrees_with_schoolbook() {
        // (1 + z + ... + z^39) * (1 + 2z + ... + 40z^39)
        let a = poly(&vec![1; 40]);
        let b = DensePoly::new((1..=40).map(Q::from_integer).collect());

        let fast = a.mul_karatsuba(&b);
        let slow = a.mul_schoolbook(&b);
        assert_eq!(fast, slow);
        assert_eq!(fast.degree(), 78);
    }

    #[test]
    fn evaluation_by_horner() {
        // p(z) = 1 + 2z + 3z^2 at z = -1/2 gives 3/4
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&Q::new(-1, 2)), Q::new(3, 4));
        assert_eq!(DensePoly::<Q>::zero().eval(&Q::from(9)), Q::zero());
    }

    #[test]
    fn monomials_and_powers() {
        let m = DensePoly::monomial(Q::from(5), 3);
        assert_eq!(m.degree(), 3);
        assert_eq!(m, DensePoly::z().pow(3).scale(&Q::from(5)));

        // (z + 1)^2 = z^2 + 2z + 1
        let sq = DensePoly::z().add(&DensePoly::one()).pow(2);
        assert_eq!(sq, poly(&[1, 2, 1]));
        assert_eq!(poly(&[7]).pow(0), DensePoly::one());
    }

    #[test]
    fn derivative_drops_the_constant_term() {
        // (1 + 2z + 3z^2)' = 2 + 6z
        let dp = poly(&[1, 2, 3]).derivative();
        assert_eq!(dp, poly(&[2, 6]));
        assert!(poly(&[41]).derivative().is_zero());
    }

    #[test]
    fn display_skips_zero_terms() {
        let p = DensePoly::new(vec![Q::new(1, 2), Q::from(0), Q::from(3)]);
        assert_eq!(format!("{p}"), "1/2 + 3*z^2");
        assert_eq!(format!("{}", DensePoly::<Q>::zero()), "0");
        assert_eq!(format!("{}", DensePoly::<Q>::z()), "1*z");
    }
}
