//! The algebraic trait ladder.
//!
//! Polynomials, rational functions, and differential operators are all
//! generic over their coefficients. These traits name the structure a
//! coefficient type has to offer, from plain rings up to fields.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring: addition, subtraction, and multiplication with the usual
/// identities.
///
/// Implementors promise that addition is associative and commutative
/// with identity [`Ring::zero`], that multiplication is associative
/// with identity [`Ring::one`] and distributes over addition, and that
/// negation inverts addition. The operator bounds take `Self` by value;
/// coefficient types are cheap enough to clone at call sites.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Zero, the identity of addition.
    fn zero() -> Self;

    /// One, the identity of multiplication.
    fn one() -> Self;

    /// Whether this element is zero.
    fn is_zero(&self) -> bool;

    /// Whether this element is one.
    fn is_one(&self) -> bool;

    /// The n-fold sum of `self`, with `n` allowed to be negative.
    ///
    /// Computed by binary decomposition of `n`, so it stays usable for
    /// large scalars.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut acc = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                acc = acc + addend.clone();
            }
            addend = addend.clone() + addend;
            k >>= 1;
        }

        if n < 0 {
            -acc
        } else {
            acc
        }
    }

    /// Raises `self` to a non-negative power by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut sq = self.clone();
        let mut e = n;

        while e > 0 {
            if e % 2 == 1 {
                acc = acc * sq.clone();
            }
            sq = sq.clone() * sq;
            e /= 2;
        }

        acc
    }
}

/// A ring whose multiplication commutes.
///
/// Coefficients of differential operators always live in commutative
/// rings; the operators themselves famously do not.
pub trait CommutativeRing: Ring {}

/// A commutative ring without zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// An integral domain with division and remainder.
///
/// `div_rem(a, b)` returns `(q, r)` with `a = q*b + r` and `r` smaller
/// than `b` under the domain's Euclidean size function.
pub trait EuclideanDomain: IntegralDomain {
    /// The quotient and remainder of dividing by `other`.
    ///
    /// # Panics
    ///
    /// Implementations are free to panic when `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// The quotient half of [`EuclideanDomain::div_rem`].
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// The remainder half of [`EuclideanDomain::div_rem`].
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Greatest common divisor by the Euclidean algorithm.
    fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.rem(&b);
            a = std::mem::replace(&mut b, r);
        }
        a
    }

    /// Least common multiple; zero if either argument is zero.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        self.clone() * other.div(&self.gcd(other))
    }

    /// Bezout coefficients alongside the gcd.
    ///
    /// Returns `(g, x, y)` with `g = self*x + other*y`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);
}

/// A field: every non-zero element is invertible.
pub trait Field: EuclideanDomain {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Exact division.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

/// A ring with a compatible total order.
pub trait OrderedRing: Ring + Ord {
    /// The absolute value.
    fn abs(&self) -> Self;

    /// The sign as -1, 0, or 1.
    fn signum(&self) -> i8;
}
