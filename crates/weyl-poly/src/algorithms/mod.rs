//! Division and GCD routines for polynomials over a field.

pub mod gcd;
