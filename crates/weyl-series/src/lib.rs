//! Truncated power series expansions.
//!
//! This crate provides:
//! - [`PowerSeries`]: exact truncated series f = Σ cₙ zⁿ + O(z^precision)
//! - Arithmetic (addition, Cauchy product, scaling) and the formal derivative
//!
//! A series is stored eagerly as its known coefficients; the precision is
//! the number of known terms. Applying a differential operator to a series
//! (in `weyl-ore`) consumes one term of precision per derivative, so the
//! arithmetic here tracks precision explicitly rather than padding with
//! zeros.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod power_series;

pub use power_series::PowerSeries;
