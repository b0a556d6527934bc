//! Errors raised at the witness boundary.

use thiserror::Error;

/// An operand required by a ring operation was absent.
///
/// Element types plug this into their own error type with a
/// `From<MissingOperand>` conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("missing {operand} operand")]
pub struct MissingOperand {
    /// Which operand was absent: `"left"` or `"right"`.
    pub operand: &'static str,
}

impl MissingOperand {
    /// The left (or only) operand was absent.
    pub const LEFT: Self = Self { operand: "left" };

    /// The right operand of a binary operation was absent.
    pub const RIGHT: Self = Self { operand: "right" };
}
