//! Operator overloads for differential operators.
//!
//! These delegate to the inherent skew arithmetic so operators combine
//! with the usual `+`, `-`, `*` syntax. Multiplication is composition
//! and does not commute.

use std::ops::{Add, Mul, Neg, Sub};

use crate::derivation::DifferentialRing;
use crate::operator::DiffOp;

impl<R: DifferentialRing> Add for DiffOp<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        DiffOp::add(&self, &other)
    }
}

impl<R: DifferentialRing> Add<&DiffOp<R>> for DiffOp<R> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        DiffOp::add(&self, other)
    }
}

impl<R: DifferentialRing> Sub for DiffOp<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        DiffOp::sub(&self, &other)
    }
}

impl<R: DifferentialRing> Sub<&DiffOp<R>> for DiffOp<R> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        DiffOp::sub(&self, other)
    }
}

impl<R: DifferentialRing> Mul for DiffOp<R> {
    type Output = Self;

    /// Composes two operators under the rule `Dz·a = a·Dz + a′`.
    fn mul(self, other: Self) -> Self::Output {
        DiffOp::mul(&self, &other)
    }
}

impl<R: DifferentialRing> Mul<&DiffOp<R>> for DiffOp<R> {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        DiffOp::mul(&self, other)
    }
}

impl<R: DifferentialRing> Neg for DiffOp<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DiffOp::neg(&self)
    }
}
