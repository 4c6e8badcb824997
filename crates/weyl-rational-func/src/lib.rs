//! The field of rational functions in z.
//!
//! [`RationalFunction`] is a quotient of dense polynomials kept in
//! lowest terms with a monic denominator. It plays one role in this
//! workspace: the operator algebra in `weyl-ore` is defined over this
//! field, and clearing its denominators is how operators are brought
//! back to polynomial coefficients.
//!
//! Structural equality doubles as field equality because construction
//! always reduces to the canonical form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod rational_func;

pub use rational_func::RationalFunction;
