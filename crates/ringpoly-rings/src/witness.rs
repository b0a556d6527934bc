//! Function-pointer witness tables.
//!
//! `Witness` stores the seven ring operations as plain `fn` pointers, so
//! a table can live in a `const` and be passed around by value.

use crate::error::MissingOperand;
use crate::traits::RingWitness;

/// Identifies one of the seven witness operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// quotient of `a / b`
    Divide,
    /// remainder of `a / b`
    Remainder,
    /// `+a`
    Plus,
    /// `-a`
    Negate,
}

impl RingOp {
    /// All operations, in table order.
    pub const ALL: [RingOp; 7] = [
        RingOp::Add,
        RingOp::Subtract,
        RingOp::Multiply,
        RingOp::Divide,
        RingOp::Remainder,
        RingOp::Plus,
        RingOp::Negate,
    ];

    /// Number of operands the operation takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            RingOp::Plus | RingOp::Negate => 1,
            _ => 2,
        }
    }

    /// The operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            RingOp::Add | RingOp::Plus => "+",
            RingOp::Subtract | RingOp::Negate => "-",
            RingOp::Multiply => "*",
            RingOp::Divide => "/",
            RingOp::Remainder => "%",
        }
    }
}

/// A ring witness as a table of function pointers.
pub struct Witness<T, E> {
    /// `a + b`
    pub add: fn(&T, &T) -> T,
    /// `a - b`
    pub subtract: fn(&T, &T) -> T,
    /// `a * b`
    pub multiply: fn(&T, &T) -> Result<T, E>,
    /// quotient of `a / b`
    pub divide: fn(&T, &T) -> Result<T, E>,
    /// remainder of `a / b`
    pub remainder: fn(&T, &T) -> Result<T, E>,
    /// `+a`
    pub plus: fn(&T) -> T,
    /// `-a`
    pub negate: fn(&T) -> T,
}

impl<T, E> Clone for Witness<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Witness<T, E> {}

impl<T, E> std::fmt::Debug for Witness<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Witness")
            .field("elem", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T, E> Witness<T, E> {
    /// Applies `op` to optional operands.
    ///
    /// This is the dynamic entry point for callers that assemble operands
    /// at runtime. Absent operands are rejected before the operation runs;
    /// the right operand of a unary operation is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MissingOperand`] (converted into `E`) when a required
    /// operand is `None`, or whatever error the operation itself raises.
    pub fn apply(&self, op: RingOp, lhs: Option<&T>, rhs: Option<&T>) -> Result<T, E>
    where
        E: From<MissingOperand>,
    {
        let a = lhs.ok_or(MissingOperand::LEFT)?;

        if op.arity() == 1 {
            return Ok(match op {
                RingOp::Plus => (self.plus)(a),
                _ => (self.negate)(a),
            });
        }

        let b = rhs.ok_or(MissingOperand::RIGHT)?;
        match op {
            RingOp::Add => Ok((self.add)(a, b)),
            RingOp::Subtract => Ok((self.subtract)(a, b)),
            RingOp::Multiply => (self.multiply)(a, b),
            RingOp::Divide => (self.divide)(a, b),
            RingOp::Remainder => (self.remainder)(a, b),
            RingOp::Plus => Ok((self.plus)(a)),
            RingOp::Negate => Ok((self.negate)(a)),
        }
    }
}

impl<T, E> RingWitness for Witness<T, E> {
    type Elem = T;
    type Error = E;

    fn add(&self, a: &T, b: &T) -> T {
        (self.add)(a, b)
    }

    fn subtract(&self, a: &T, b: &T) -> T {
        (self.subtract)(a, b)
    }

    fn multiply(&self, a: &T, b: &T) -> Result<T, E> {
        (self.multiply)(a, b)
    }

    fn divide(&self, a: &T, b: &T) -> Result<T, E> {
        (self.divide)(a, b)
    }

    fn remainder(&self, a: &T, b: &T) -> Result<T, E> {
        (self.remainder)(a, b)
    }

    fn plus(&self, a: &T) -> T {
        (self.plus)(a)
    }

    fn negate(&self, a: &T) -> T {
        (self.negate)(a)
    }
}
