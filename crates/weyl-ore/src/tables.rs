//! Building operators from static coefficient tables.
//!
//! Catalogue operators too large to write as expressions are stored as
//! coefficient rows: row i holds the coefficient of Dz^i as a
//! polynomial in ascending powers of z. Integer entries up to `i128`
//! use plain literals; anything larger is kept as decimal strings and
//! decoded on access.

use thiserror::Error;

use weyl_integers::{Integer, Rational};
use weyl_poly::DensePoly;
use weyl_rational_func::RationalFunction;
use weyl_rings::Q;

use crate::operator::DiffOp;
use crate::{RationalOperator, WeylOperator};

/// Errors from decoding a coefficient table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A coefficient failed to parse as a decimal integer.
    #[error("row {row}: invalid integer literal {literal:?}")]
    BadLiteral {
        /// Index of the offending row (the Dz-power).
        row: usize,
        /// The literal that failed to parse.
        literal: String,
    },

    /// A denominator polynomial was identically zero.
    #[error("row {row}: denominator polynomial is zero")]
    ZeroDenominator {
        /// Index of the offending row (the Dz-power).
        row: usize,
    },
}

/// Builds an operator with polynomial coefficients from integer rows.
///
/// Row i lists the coefficients of z^0, z^1, ... of the polynomial in
/// front of Dz^i.
#[must_use]
pub fn from_polynomial_rows(rows: &[&[i128]]) -> WeylOperator {
    let coeffs = rows
        .iter()
        .map(|row| DensePoly::new(row.iter().map(|&v| Q::from(v)).collect()))
        .collect();
    DiffOp::new(coeffs)
}

fn parse_poly(row: usize, literals: &[&str]) -> Result<DensePoly<Q>, TableError> {
    let mut coeffs = Vec::with_capacity(literals.len());
    for lit in literals {
        let n = Integer::from_str_radix(lit, 10).map_err(|_| TableError::BadLiteral {
            row,
            literal: (*lit).to_string(),
        })?;
        coeffs.push(Q::from(Rational::from_integer(n)));
    }
    Ok(DensePoly::new(coeffs))
}

/// Builds an operator with rational-function coefficients from rows of
/// decimal strings.
///
/// Each row is a (numerator, denominator) pair of polynomials, both in
/// ascending powers of z.
///
/// # Errors
///
/// Returns [`TableError::BadLiteral`] if a string is not a decimal
/// integer and [`TableError::ZeroDenominator`] if a denominator
/// polynomial has no nonzero coefficients.
pub fn from_rational_rows(rows: &[(&[&str], &[&str])]) -> Result<RationalOperator, TableError> {
    let mut coeffs = Vec::with_capacity(rows.len());

    for (i, (num, den)) in rows.iter().enumerate() {
        let numerator = parse_poly(i, num)?;
        let denominator = parse_poly(i, den)?;
        if denominator.is_zero() {
            return Err(TableError::ZeroDenominator { row: i });
        }
        coeffs.push(RationalFunction::new(numerator, denominator));
    }

    Ok(DiffOp::new(coeffs))
}
