//! Coefficient rings that carry d/dz.
//!
//! The commutation rule of the operator algebra, Dz*a = a*Dz + a',
//! needs a derivative on the coefficient side. [`DifferentialRing`]
//! names that requirement; both coefficient rings used here, dense
//! polynomials and rational functions in z, satisfy it with the
//! standard derivation.

use weyl_poly::dense::DensePoly;
use weyl_rational_func::RationalFunction;
use weyl_rings::traits::{CommutativeRing, Field};

/// A commutative ring together with a derivation.
///
/// Implementors promise additivity and the Leibniz rule
/// `(a*b)' = a'*b + a*b'`.
pub trait DifferentialRing: CommutativeRing {
    /// The derivative of this element.
    fn derivative(&self) -> Self;

    /// Whether the element is a constant of the derivation.
    fn is_constant(&self) -> bool {
        self.derivative().is_zero()
    }
}

impl<R: CommutativeRing> DifferentialRing for DensePoly<R> {
    fn derivative(&self) -> Self {
        DensePoly::derivative(self)
    }

    fn is_constant(&self) -> bool {
        self.degree() == 0
    }
}

impl<K: Field> DifferentialRing for RationalFunction<K> {
    fn derivative(&self) -> Self {
        RationalFunction::derivative(self)
    }

    fn is_constant(&self) -> bool {
        self.as_polynomial().is_some_and(|p| p.degree() == 0)
    }
}
