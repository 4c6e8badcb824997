//! The rational base field.

use std::fmt;

use num_traits::{One, Zero};
use weyl_integers::{Integer, Rational};

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};

/// An element of the field of rational numbers.
///
/// A thin wrapper over [`weyl_integers::Rational`] that carries the
/// algebraic trait ladder. Every coefficient ring in the workspace,
/// from dense polynomials to differential operators, bottoms out here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(Rational);

impl Q {
    /// Builds `num/den`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Embeds a machine integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// The numerator of the reduced form. Carries the sign.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// The denominator of the reduced form, always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }

    /// Returns true for strictly negative values.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

// A field is trivially Euclidean: division is exact and every non-zero
// element is a unit.
impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0.clone() / other.0.clone()), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            return Self::zero();
        }
        Self::one()
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => (Self::zero(), Self::zero(), Self::zero()),
            (false, _) => (Self::one(), Self(self.0.recip()), Self::zero()),
            (true, false) => (Self::one(), Self::zero(), Self(other.0.recip())),
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.recip()))
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i32> for Q {
    fn from(value: i32) -> Self {
        Self(Rational::from(value))
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self(Rational::from(value))
    }
}

impl From<i128> for Q {
    fn from(value: i128) -> Self {
        Self(Rational::from(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
