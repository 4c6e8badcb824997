//! # Weyl
//!
//! Exact linear differential operators over the rationals.
//!
//! Weyl models the algebras Q[z]⟨Dz⟩ and Q(z)⟨Dz⟩: skew polynomials in a
//! derivation Dz with polynomial or rational function coefficients, subject
//! to the commutation rule Dz·a = a·Dz + a′.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: big integer and rational scalar arithmetic
//! - **Exact Coefficients**: dense polynomials and normalized rational
//!   functions over Q
//! - **Skew Arithmetic**: operator sums, products, powers, and the formal
//!   adjoint
//! - **Euclidean Structure**: right division, GCRD, and LCLM over Q(z)
//! - **Operator Catalogue**: named operators from the factorization and
//!   Fuchsian literature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use weyl::prelude::*;
//!
//! let (z, dz) = WeylOperator::generators();
//! let airy = dz.pow(2) - z;
//! assert_eq!(airy.order(), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use weyl_catalog as catalog;
pub use weyl_integers as integers;
pub use weyl_ore as ore;
pub use weyl_poly as poly;
pub use weyl_rational_func as rational_func;
pub use weyl_rings as rings;
pub use weyl_series as series;

/// The common imports in one place.
pub mod prelude {
    pub use weyl_integers::{Integer, Rational};
    pub use weyl_ore::{DiffOp, RationalOperator, WeylOperator};
    pub use weyl_poly::DensePoly;
    pub use weyl_rational_func::RationalFunction;
    pub use weyl_rings::{Field, Q, Ring};
    pub use weyl_series::PowerSeries;
}
