//! # ringpoly
//!
//! Polynomial ring arithmetic over `f64` coefficients.
//!
//! ## Features
//!
//! - **Canonical Form**: zero owns no coefficients, leading terms never vanish
//! - **Ring Arithmetic**: add, subtract, multiply, negate with exact identities
//! - **Long Division**: quotient and remainder with a zero-divisor error
//! - **Calculus**: Horner evaluation and formal derivatives
//! - **Witnesses**: the seven ring operations as a trait or a `fn` table
//!
//! ## Quick Start
//!
//! ```rust
//! use ringpoly::prelude::*;
//!
//! // p(x) = 2 + 3x + 4x^2
//! let p = PolyF64::from_coefficients(&[2.0, 3.0, 4.0])?;
//! assert_eq!(p.evaluate(5.0), 117.0);
//! assert_eq!(p.derivative().to_string(), "(8.0*x + 3.0)");
//!
//! let (q, r) = p.div_rem(&PolyF64::x())?;
//! assert_eq!(q.coefficients(), vec![3.0, 4.0]);
//! assert_eq!(r.coefficients(), vec![2.0]);
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ringpoly_poly as poly;
pub use ringpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ringpoly_poly::{PolyConfig, PolyError, PolyF64, PolyWitness, POLY_WITNESS};
    pub use ringpoly_rings::{product, sum, RingOp, RingWitness, Witness};
}
