//! # weyl-ore
//!
//! Linear differential operators with polynomial or rational function
//! coefficients.
//!
//! An operator L = aₙ Dz^n + ... + a₁ Dz + a₀ acts on functions by
//! L(f) = Σ aᵢ f⁽ⁱ⁾. Operators multiply by composition, so the product
//! is not commutative; it is determined by the commutation rule
//!
//! ```text
//! Dz · a = a · Dz + a'
//! ```
//!
//! This crate provides:
//! - [`DiffOp`]: the skew-polynomial operator type over any
//!   [`DifferentialRing`]
//! - Right Euclidean division, GCRD, and LCLM over rational function
//!   coefficients
//! - The formal adjoint, operator application to ring elements and to
//!   truncated power series
//! - Table constructors for operators with large literal coefficients
//!
//! The two working instantiations are [`WeylOperator`] (polynomial
//! coefficients) and [`RationalOperator`] (rational function
//! coefficients).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod derivation;
pub mod euclid;
pub mod operator;
pub mod ops;
pub mod tables;

#[cfg(test)]
mod proptests;

pub use derivation::DifferentialRing;
pub use operator::DiffOp;
pub use tables::TableError;

use weyl_poly::DensePoly;
use weyl_rational_func::RationalFunction;
use weyl_rings::Q;

/// A differential operator with polynomial coefficients: an element of
/// the Weyl algebra Q[z]⟨Dz⟩.
pub type WeylOperator = DiffOp<DensePoly<Q>>;

/// A differential operator with rational function coefficients: an
/// element of Q(z)⟨Dz⟩.
pub type RationalOperator = DiffOp<RationalFunction<Q>>;
