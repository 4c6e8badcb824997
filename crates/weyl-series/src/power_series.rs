//! Exact truncated power series.
//!
//! A series holds its known coefficients c₀..c_{p-1}; everything from
//! degree p on is unknown, written O(z^p). Operations return the largest
//! precision justified by their inputs.

use weyl_poly::dense::DensePoly;
use weyl_rings::traits::{Field, Ring};

/// A truncated power series Σ cₙ zⁿ + O(z^precision).
///
/// Unlike a polynomial, trailing zero coefficients are significant: they
/// assert that the corresponding terms vanish.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PowerSeries<R: Ring> {
    /// Known coefficients in ascending degree order; length is the precision.
    coeffs: Vec<R>,
}

impl<R: Ring> PowerSeries<R> {
    /// Creates a series from its known coefficients.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero series known to the given precision.
    #[must_use]
    pub fn zero(precision: usize) -> Self {
        Self {
            coeffs: vec![R::zero(); precision],
        }
    }

    /// Creates a constant series known to the given precision.
    #[must_use]
    pub fn constant(c: R, precision: usize) -> Self {
        let mut coeffs = vec![R::zero(); precision];
        if precision > 0 {
            coeffs[0] = c;
        }
        Self { coeffs }
    }

    /// Returns the coefficient of z^n.
    ///
    /// # Panics
    ///
    /// Panics if `n` is at or beyond the precision.
    #[must_use]
    pub fn coeff(&self, n: usize) -> R {
        self.coeffs
            .get(n)
            .cloned()
            .expect("coefficient index exceeds series precision")
    }

    /// Returns the number of known terms.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if every known coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Lowers the precision to at most `precision` terms.
    #[must_use]
    pub fn truncate(&self, precision: usize) -> Self {
        Self {
            coeffs: self.coeffs[..precision.min(self.coeffs.len())].to_vec(),
        }
    }

    /// Adds two series; the result has the smaller precision.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let coeffs = (0..precision)
            .map(|n| self.coeffs[n].clone() + other.coeffs[n].clone())
            .collect();
        Self { coeffs }
    }

    /// Subtracts two series; the result has the smaller precision.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let coeffs = (0..precision)
            .map(|n| self.coeffs[n].clone() - other.coeffs[n].clone())
            .collect();
        Self { coeffs }
    }

    /// Scales a series by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        }
    }

    /// Multiplies two series (Cauchy product); the result has the smaller
    /// precision.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let mut coeffs = Vec::with_capacity(precision);

        for n in 0..precision {
            let mut sum = R::zero();
            for i in 0..=n {
                sum = sum + self.coeffs[i].clone() * other.coeffs[n - i].clone();
            }
            coeffs.push(sum);
        }

        Self { coeffs }
    }

    /// Multiplies by an exact polynomial, preserving the precision.
    #[must_use]
    pub fn mul_poly(&self, p: &DensePoly<R>) -> Self {
        let precision = self.precision();
        let mut coeffs = Vec::with_capacity(precision);

        for n in 0..precision {
            let mut sum = R::zero();
            for j in 0..=n.min(p.degree()) {
                sum = sum + p.coeff(j) * self.coeffs[n - j].clone();
            }
            coeffs.push(sum);
        }

        Self { coeffs }
    }

    /// Computes the formal derivative d/dz, losing one term of precision.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.is_empty() {
            return self.clone();
        }

        let coeffs = self
            .coeffs
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, c)| c.mul_by_scalar((i + 1) as i64))
            .collect();
        Self { coeffs }
    }
}

impl<R: Field> PowerSeries<R> {
    /// The series of exp(z): coefficients 1/n!.
    #[must_use]
    pub fn exp(precision: usize) -> Self {
        let mut coeffs = Vec::with_capacity(precision);
        let mut term = R::one();
        for n in 0..precision {
            if n > 0 {
                term = term.field_div(&R::one().mul_by_scalar(n as i64));
            }
            coeffs.push(term.clone());
        }
        Self { coeffs }
    }

    /// The geometric series 1/(1-z): all coefficients 1.
    #[must_use]
    pub fn geometric(precision: usize) -> Self {
        Self {
            coeffs: vec![R::one(); precision],
        }
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for PowerSeries<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*z"),
                _ => format!("{c}*z^{i}"),
            };
            terms.push(term);
        }

        let p = self.precision();
        if terms.is_empty() {
            write!(f, "O(z^{p})")
        } else {
            write!(f, "{} + O(z^{p})", terms.join(" + "))
        }
    }
}
