//! Rational functions in the variable z.
//!
//! A value is a quotient of two dense polynomials kept in a canonical
//! form: numerator and denominator are coprime, the denominator is
//! monic, and zero is stored as 0/1. Construction enforces the form,
//! so derived comparisons elsewhere can rely on it.

use weyl_poly::algorithms::gcd::{poly_div_rem, poly_gcd};
use weyl_poly::dense::DensePoly;
use weyl_rings::traits::Field;

/// A quotient of polynomials over a field `K`, in lowest terms with a
/// monic denominator.
#[derive(Clone, Debug)]
pub struct RationalFunction<K: Field> {
    numerator: DensePoly<K>,
    denominator: DensePoly<K>,
}

impl<K: Field> RationalFunction<K> {
    /// Builds `numerator / denominator` and reduces it to canonical
    /// form.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn new(numerator: DensePoly<K>, denominator: DensePoly<K>) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");

        if numerator.is_zero() {
            return Self {
                numerator: DensePoly::zero(),
                denominator: DensePoly::one(),
            };
        }

        let g = poly_gcd(&numerator, &denominator);
        let (mut num, mut den) = if g.degree() > 0 {
            (
                poly_div_rem(&numerator, &g).0,
                poly_div_rem(&denominator, &g).0,
            )
        } else {
            (numerator, denominator)
        };

        let lead = den.leading_coeff().clone();
        if !lead.is_one() {
            let lead_inv = lead
                .inv()
                .expect("non-zero denominator has an invertible leading coefficient");
            num = num.scale(&lead_inv);
            den = den.scale(&lead_inv);
        }

        Self {
            numerator: num,
            denominator: den,
        }
    }

    /// Embeds a polynomial as a rational function over 1.
    #[must_use]
    pub fn from_poly(p: DensePoly<K>) -> Self {
        Self {
            numerator: p,
            denominator: DensePoly::one(),
        }
    }

    /// The zero function, stored as 0/1.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_poly(DensePoly::zero())
    }

    /// The constant function 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_poly(DensePoly::one())
    }

    /// A constant function.
    #[must_use]
    pub fn constant(c: K) -> Self {
        Self::from_poly(DensePoly::constant(c))
    }

    /// The coordinate function z.
    #[must_use]
    pub fn z() -> Self {
        Self::from_poly(DensePoly::z())
    }

    /// The numerator of the reduced form.
    #[must_use]
    pub fn numerator(&self) -> &DensePoly<K> {
        &self.numerator
    }

    /// The denominator of the reduced form, always monic.
    #[must_use]
    pub fn denominator(&self) -> &DensePoly<K> {
        &self.denominator
    }

    /// Returns true for the zero function.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true when the denominator is the constant 1.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == 0 && self.denominator.leading_coeff().is_one()
    }

    /// The numerator, if the function is a polynomial.
    #[must_use]
    pub fn as_polynomial(&self) -> Option<&DensePoly<K>> {
        self.is_polynomial().then_some(&self.numerator)
    }

    /// Evaluates at a point, or `None` on a pole.
    pub fn eval(&self, x: &K) -> Option<K> {
        let den_val = self.denominator.eval(x);
        den_val.inv().map(|d| self.numerator.eval(x) * d)
    }

    /// The derivative, by the quotient rule.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let p = &self.numerator;
        let q = &self.denominator;
        let num = p.derivative().mul(q).sub(&p.mul(&q.derivative()));
        Self::new(num, q.mul(q))
    }

    /// Negates the function. The canonical form is preserved as is.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }
}

// Canonical form makes structural comparison a valid field comparison.
impl<K: Field> PartialEq for RationalFunction<K> {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<K: Field> Eq for RationalFunction<K> {}

impl<K: Field + std::fmt::Display> std::fmt::Display for RationalFunction<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_polynomial() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}) / ({})", self.numerator, self.denominator)
        }
    }
}
