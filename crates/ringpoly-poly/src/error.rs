//! Errors raised by polynomial construction and arithmetic.

use ringpoly_rings::MissingOperand;
use thiserror::Error;

/// Errors that can occur while building or dividing polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A constructor or configuration received an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The divisor was the zero polynomial.
    #[error("division by the zero polynomial")]
    DivideByZero,

    /// A required operand was absent.
    #[error("missing {0} operand")]
    NullInput(&'static str),
}

impl PolyError {
    pub(crate) fn too_many_terms(len: usize, max_terms: usize) -> Self {
        PolyError::InvalidArgument(format!(
            "{len} coefficients exceeds the limit of {max_terms}"
        ))
    }
}

impl From<MissingOperand> for PolyError {
    fn from(value: MissingOperand) -> Self {
        PolyError::NullInput(value.operand)
    }
}
