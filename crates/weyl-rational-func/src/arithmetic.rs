//! Field arithmetic for rational functions.
//!
//! The named `_ref` methods do the work; the `std::ops` impls and the
//! trait ladder up to [`Field`] forward to them. Every operation
//! rebuilds the canonical form through [`RationalFunction::new`], so
//! results stay reduced with a monic denominator.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::RationalFunction;
use weyl_rings::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

impl<K: Field> RationalFunction<K> {
    /// The sum `a/b + c/d = (ad + cb) / bd`.
    pub fn add_ref(&self, other: &Self) -> Self {
        let num = self
            .numerator()
            .mul(other.denominator())
            .add(other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());
        Self::new(num, den)
    }

    /// The difference `a/b - c/d = (ad - cb) / bd`.
    pub fn sub_ref(&self, other: &Self) -> Self {
        let num = self
            .numerator()
            .mul(other.denominator())
            .sub(other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());
        Self::new(num, den)
    }

    /// The product, reduced after cross-multiplying.
    pub fn mul_ref(&self, other: &Self) -> Self {
        Self::new(
            self.numerator().mul(other.numerator()),
            self.denominator().mul(other.denominator()),
        )
    }

    /// Division as multiplication by the flipped quotient.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div_ref(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        Self::new(
            self.numerator().mul(other.denominator()),
            self.denominator().mul(other.numerator()),
        )
    }

    /// The reciprocal, or `None` for zero.
    pub fn inv(&self) -> Option<Self> {
        (!self.is_zero())
            .then(|| Self::new(self.denominator().clone(), self.numerator().clone()))
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut sq = self.clone();
        let mut e = n;

        while e > 0 {
            if e % 2 == 1 {
                acc = acc.mul_ref(&sq);
            }
            sq = sq.mul_ref(&sq);
            e /= 2;
        }

        acc
    }
}

impl<K: Field> Add for RationalFunction<K> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_ref(&other)
    }
}

impl<K: Field> Sub for RationalFunction<K> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.sub_ref(&other)
    }
}

impl<K: Field> Mul for RationalFunction<K> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.mul_ref(&other)
    }
}

impl<K: Field> Div for RationalFunction<K> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.div_ref(&other)
    }
}

impl<K: Field> Neg for RationalFunction<K> {
    type Output = Self;

    fn neg(self) -> Self {
        RationalFunction::neg(&self)
    }
}

impl<K: Field> Ring for RationalFunction<K> {
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
        self.numerator().is_one() && self.denominator().is_one()
    }
}

impl<K: Field> CommutativeRing for RationalFunction<K> {}
impl<K: Field> IntegralDomain for RationalFunction<K> {}

// Field conventions: the remainder of any division is zero, and the
// gcd of anything with a non-zero element is 1.
impl<K: Field> EuclideanDomain for RationalFunction<K> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self.div_ref(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => (Self::zero(), Self::zero(), Self::zero()),
            (false, _) => {
                let x = self.inv().expect("non-zero element has a reciprocal");
                (Self::one(), x, Self::zero())
            }
            (true, false) => {
                let y = other.inv().expect("non-zero element has a reciprocal");
                (Self::one(), Self::zero(), y)
            }
        }
    }
}

impl<K: Field> Field for RationalFunction<K> {
    fn inv(&self) -> Option<Self> {
        RationalFunction::inv(self)
    }
}
