//! # ringpoly-rings
//!
//! Ring operation witnesses for ringpoly.
//!
//! This crate provides:
//! - The `RingWitness` trait: the seven ring operations as a strategy
//! - `Witness`: the same operations as a table of plain function pointers
//! - Generic folds (`sum`, `product`) over any witness
//!
//! ## Operations
//!
//! ```text
//! RingWitness
//!  ├── add, subtract, plus, negate   (total)
//!  └── multiply, divide, remainder   (fallible)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fold;
pub mod traits;
pub mod witness;

pub use error::MissingOperand;
pub use fold::{product, sum};
pub use traits::RingWitness;
pub use witness::{RingOp, Witness};
