//! # ringpoly-poly
//!
//! Dense univariate polynomials over `f64` for ringpoly.
//!
//! This crate provides:
//! - `PolyF64`, an immutable polynomial kept in canonical form
//! - Ring arithmetic, Horner evaluation, differentiation
//! - Long division with remainder
//! - Ring witnesses (`PolyWitness`, `POLY_WITNESS`)
//!
//! ## Numerical Notes
//!
//! Coefficients are compared exactly: there is no tolerance anywhere in
//! equality or canonicalization. Multiplication sums products directly
//! and division does no pivoting, so both accumulate ordinary rounding
//! error. Multiplying by the zero polynomial is defined to give zero even
//! when the other operand holds infinities or NaNs.
//!
//! ## Features
//!
//! - `parallel`: long products are convolved on the rayon pool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod dense;
pub mod display;
pub mod division;
pub mod error;
pub mod ops;
#[cfg(feature = "parallel")]
mod parallel;
pub mod witness;

#[cfg(test)]
mod proptests;

pub use config::{PolyConfig, DEFAULT_MAX_TERMS};
pub use dense::PolyF64;
pub use error::PolyError;
pub use witness::{PolyWitness, POLY_WITNESS};
