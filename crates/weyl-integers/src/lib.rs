//! # weyl-integers
//!
//! Exact integer and rational arithmetic, wrapped over `dashu`.
//!
//! The operator catalogue stores coefficients as decimal literals of
//! up to about eighty digits; [`Integer`] decodes and manipulates
//! those, and [`Rational`] is the ground field every higher layer
//! builds on. Nothing in this workspace ever rounds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
