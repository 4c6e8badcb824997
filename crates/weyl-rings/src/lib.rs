//! # weyl-rings
//!
//! The algebraic trait ladder and the rational base field `Q`.
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```
//!
//! Higher layers stay generic over these traits: `weyl-poly` implements
//! them for dense polynomials, `weyl-rational-func` for fractions of
//! polynomials, and `weyl-ore` builds differential operators on top of
//! either coefficient ring.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
