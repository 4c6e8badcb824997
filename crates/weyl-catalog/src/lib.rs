//! Catalogue of named differential operators
//!
//! This crate is a data companion to `weyl-ore`: a collection of concrete
//! operators from the literature, stored exactly and rebuilt on demand.
//!
//! - [`factorization`]: operators gathered around an operator factorization
//!   project, from annihilators of algebraic functions to large
//!   creative-telescoping certificates
//! - [`random_fuchsian`]: irreducible Fuchsian operators drawn at random
//!   for the experiments of Chyzak, Goyer, Mezzarobba (2022)
//!
//! Entries that come with a name and provenance are also available through
//! [`named_operators`], which returns the whole collection for iteration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factorization;
pub mod random_fuchsian;

pub use factorization::{OperatorEntry, named_operators};
