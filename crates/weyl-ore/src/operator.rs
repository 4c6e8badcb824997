//! The skew-polynomial operator type.
//!
//! Coefficients are stored in ascending order of Dz-power. The zero
//! operator is the empty coefficient vector; every constructor trims
//! trailing zero coefficients, so equal operators compare equal
//! structurally.

use weyl_integers::{Integer, Rational};
use weyl_poly::algorithms::gcd::make_monic;
use weyl_poly::dense::DensePoly;
use weyl_rational_func::RationalFunction;
use weyl_rings::rationals::Q;
use weyl_rings::traits::{EuclideanDomain, Field, Ring};
use weyl_series::PowerSeries;

use crate::derivation::DifferentialRing;

/// A linear differential operator Σ aᵢ Dz^i over a differential ring R.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DiffOp<R: DifferentialRing> {
    /// Coefficients of Dz^0, Dz^1, ... with no trailing zeros.
    pub(crate) coeffs: Vec<R>,
}

impl<R: DifferentialRing> DiffOp<R> {
    /// Creates an operator from coefficients in ascending Dz-power order.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero operator.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the identity operator.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates the order-zero operator that multiplies by `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the operator c * Dz^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Creates the derivation operator Dz.
    #[must_use]
    pub fn dz() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Returns the order, or `None` for the zero operator.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero operator.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of Dz^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients in ascending Dz-power order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Returns the coefficient of the highest Dz-power.
    ///
    /// # Panics
    ///
    /// Panics if this is the zero operator.
    #[must_use]
    pub fn leading_coefficient(&self) -> &R {
        self.coeffs
            .last()
            .expect("zero operator has no leading coefficient")
    }

    /// Adds two operators.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            result.push(a + b);
        }

        Self::new(result)
    }

    /// Negates an operator.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two operators.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every coefficient by a ring element on the left.
    ///
    /// This equals the operator product `constant(c) * self`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| c.clone() * x.clone()).collect())
    }

    /// Composes Dz with this operator.
    ///
    /// Dz ∘ Σ aᵢ Dz^i = Σ (aᵢ' Dz^i + aᵢ Dz^(i+1)) by the commutation
    /// rule, so every coefficient moves up one order and contributes its
    /// derivative in place.
    fn d_compose(&self) -> Self {
        let n = self.coeffs.len();
        let mut coeffs = Vec::with_capacity(n + 1);

        for j in 0..=n {
            let mut c = if j < n {
                self.coeffs[j].derivative()
            } else {
                R::zero()
            };
            if j > 0 {
                c = c + self.coeffs[j - 1].clone();
            }
            coeffs.push(c);
        }

        Self::new(coeffs)
    }

    /// Multiplies two operators (composition).
    ///
    /// The product is computed as Σ aᵢ · (Dz^i ∘ other), iterating the
    /// commutation rule; it satisfies (L*M)(f) = L(M(f)).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        let mut power = other.clone();

        for (i, a) in self.coeffs.iter().enumerate() {
            if i > 0 {
                power = power.d_compose();
            }
            if !a.is_zero() {
                result = result.add(&power.scale(a));
            }
        }

        result
    }

    /// Raises the operator to a non-negative integer power.
    ///
    /// Powers of a single operator commute with each other, so binary
    /// exponentiation is valid even though the algebra is not
    /// commutative.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Computes the formal adjoint Σ (-Dz)^i ∘ aᵢ.
    ///
    /// The adjoint is an involution and an antihomomorphism:
    /// (L*)* = L and (L*M)* = M* * L*.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        let minus_dz = Self::dz().neg();
        let mut result = Self::zero();
        let mut power = Self::one();

        for (i, a) in self.coeffs.iter().enumerate() {
            if i > 0 {
                power = power.mul(&minus_dz);
            }
            if !a.is_zero() {
                result = result.add(&power.mul(&Self::constant(a.clone())));
            }
        }

        result
    }

    /// Applies the operator to a ring element: L(f) = Σ aᵢ f⁽ⁱ⁾.
    #[must_use]
    pub fn apply(&self, f: &R) -> R {
        let mut result = R::zero();
        let mut df = f.clone();

        for (i, a) in self.coeffs.iter().enumerate() {
            if i > 0 {
                df = df.derivative();
            }
            result = result + a.clone() * df.clone();
        }

        result
    }
}

impl<F: Field> DiffOp<DensePoly<F>> {
    /// Returns the generator pair (z, Dz) of the Weyl algebra.
    #[must_use]
    pub fn generators() -> (Self, Self) {
        (Self::constant(DensePoly::z()), Self::dz())
    }

    /// Returns the maximum z-degree among the nonzero coefficients, or
    /// `None` for the zero operator.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs
            .iter()
            .filter(|c| !c.is_zero())
            .map(|c| c.degree())
            .max()
    }

    /// Applies the operator to a truncated power series.
    ///
    /// Each derivative consumes one term of precision, so the result is
    /// known to `f.precision() - order` terms.
    #[must_use]
    pub fn apply_series(&self, f: &PowerSeries<F>) -> PowerSeries<F> {
        let mut result = PowerSeries::zero(f.precision());
        let mut df = f.clone();

        for (i, a) in self.coeffs.iter().enumerate() {
            if i > 0 {
                df = df.derivative();
            }
            result = result.add(&df.mul_poly(a));
        }

        result
    }
}

impl DiffOp<DensePoly<Q>> {
    /// Divides out the rational content and normalizes the sign.
    ///
    /// The result has coprime integer coefficients and a positive
    /// leading coefficient in its leading polynomial.
    #[must_use]
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let mut num_gcd = Integer::new(0);
        let mut den_lcm = Integer::new(1);
        for p in &self.coeffs {
            for c in p.coeffs() {
                if c.is_zero() {
                    continue;
                }
                num_gcd = num_gcd.gcd(&c.numerator());
                den_lcm = den_lcm.lcm(&c.denominator());
            }
        }

        let factor = Q::from(Rational::new(den_lcm, num_gcd));
        let mut result = self.scale(&DensePoly::constant(factor));

        if result.leading_coefficient().leading_coeff().is_negative() {
            result = result.neg();
        }

        result
    }
}

impl<F: Field> DiffOp<RationalFunction<F>> {
    /// Returns the generator pair (z, Dz) of the rational operator
    /// algebra.
    #[must_use]
    pub fn generators() -> (Self, Self) {
        (Self::constant(RationalFunction::z()), Self::dz())
    }

    /// Returns the monic least common denominator of the coefficients.
    #[must_use]
    pub fn denominator(&self) -> DensePoly<F> {
        let mut lcm = DensePoly::one();
        for c in &self.coeffs {
            lcm = lcm.lcm(c.denominator());
        }
        make_monic(&lcm)
    }

    /// Clears denominators, returning the polynomial operator
    /// `denominator() * self`.
    ///
    /// Left multiplication by an order-zero operator scales the
    /// coefficients without touching derivatives, so the numerator
    /// annihilates exactly the same functions.
    #[must_use]
    pub fn numerator(&self) -> DiffOp<DensePoly<F>> {
        let den = RationalFunction::from_poly(self.denominator());
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| {
                c.mul_ref(&den)
                    .as_polynomial()
                    .cloned()
                    .expect("common denominator clears every coefficient")
            })
            .collect();
        DiffOp::new(coeffs)
    }

    /// Applies the operator to a truncated power series after clearing
    /// denominators.
    #[must_use]
    pub fn apply_series(&self, f: &PowerSeries<F>) -> PowerSeries<F> {
        self.numerator().apply_series(f)
    }
}

impl<F: Field> From<DiffOp<DensePoly<F>>> for DiffOp<RationalFunction<F>> {
    fn from(op: DiffOp<DensePoly<F>>) -> Self {
        DiffOp::new(
            op.coeffs
                .into_iter()
                .map(RationalFunction::from_poly)
                .collect(),
        )
    }
}

impl<R: DifferentialRing + std::fmt::Display> std::fmt::Display for DiffOp<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let term = match (i, c.is_one()) {
                (0, _) => format!("{c}"),
                (1, true) => "Dz".to_string(),
                (1, false) => format!("({c})*Dz"),
                (_, true) => format!("Dz^{i}"),
                (_, false) => format!("({c})*Dz^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
