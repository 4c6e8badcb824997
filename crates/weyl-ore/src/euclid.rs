//! Right Euclidean algorithms over a differential field.
//!
//! Division keeps quotients on the left: A = Q·B + R with
//! ord R < ord B. The skew product does not commute, so "right"
//! matters; a right factor of A is an operator B with R = 0 here.
//! GCRD and LCLM come from the remainder sequence, the latter by
//! tracking cofactors.

use weyl_rings::traits::Field;

use crate::derivation::DifferentialRing;
use crate::operator::DiffOp;

impl<R: DifferentialRing + Field> DiffOp<R> {
    /// Scales the operator so its leading coefficient is one.
    #[must_use]
    pub fn monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let inv = self
            .leading_coefficient()
            .inv()
            .expect("non-zero operator has an invertible leading coefficient");
        self.scale(&inv)
    }

    /// Right Euclidean division: returns (Q, R) with `self = Q·divisor + R`
    /// and ord R < ord divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero operator.
    #[must_use]
    pub fn right_div_rem(&self, divisor: &Self) -> (Self, Self) {
        let Some(d_ord) = divisor.order() else {
            panic!("division by zero operator")
        };

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while let Some(r_ord) = remainder.order() {
            if r_ord < d_ord {
                break;
            }

            // The leading coefficient of Dz^k ∘ divisor equals the
            // divisor's, so a single monomial cancels the top term.
            let factor = remainder
                .leading_coefficient()
                .field_div(divisor.leading_coefficient());
            let term = Self::monomial(factor, r_ord - d_ord);

            remainder = remainder.sub(&term.mul(divisor));
            quotient = quotient.add(&term);
        }

        (quotient, remainder)
    }

    /// Returns the remainder of right division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero operator.
    #[must_use]
    pub fn right_rem(&self, divisor: &Self) -> Self {
        self.right_div_rem(divisor).1
    }

    /// Greatest common right divisor, returned monic.
    ///
    /// Both operators are right-divisible by the result, and any common
    /// right divisor divides it.
    #[must_use]
    pub fn gcrd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.monic();
        }
        if other.is_zero() {
            return self.monic();
        }

        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.right_rem(&b);
            a = b;
            b = r;
        }

        a.monic()
    }

    /// Least common left multiple, returned monic.
    ///
    /// The result is right-divisible by both operators and has order
    /// `ord self + ord other - ord gcrd(self, other)`; its solution
    /// space is spanned by the solutions of the two inputs.
    #[must_use]
    pub fn lclm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        // Extended remainder sequence tracking the self-cofactors:
        // every r_i below satisfies r_i = u_i·self + v_i·other.
        let mut r0 = self.clone();
        let mut u0 = Self::one();
        let mut r1 = other.clone();
        let mut u1 = Self::zero();

        while !r1.is_zero() {
            let (q, r2) = r0.right_div_rem(&r1);
            let u2 = u0.sub(&q.mul(&u1));
            r0 = r1;
            u0 = u1;
            r1 = r2;
            u1 = u2;
        }

        // r1 = 0 means u1·self = -v1·other, a common left multiple.
        u1.mul(self).monic()
    }
}
