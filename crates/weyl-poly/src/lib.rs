//! # weyl-poly
//!
//! Dense univariate polynomials in the variable z.
//!
//! `DensePoly<R>` is the workhorse coefficient ring of the workspace:
//! operators in the Weyl algebra carry polynomial coefficients
//! directly, and operators over the rational-function field carry them
//! through `weyl-rational-func`. Products dispatch between a
//! schoolbook loop and Karatsuba based on operand size, and division
//! with remainder, GCD, and extended GCD are available whenever the
//! coefficients form a field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
