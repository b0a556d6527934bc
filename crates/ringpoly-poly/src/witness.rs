//! Ring witnesses for `PolyF64`.

use ringpoly_rings::{RingWitness, Witness};

use crate::dense::PolyF64;
use crate::error::PolyError;

/// The polynomial ring operations as a function-pointer table.
pub const POLY_WITNESS: Witness<PolyF64, PolyError> = Witness {
    add: PolyF64::add,
    subtract: PolyF64::sub,
    multiply: PolyF64::mul,
    divide: PolyF64::div,
    remainder: PolyF64::rem,
    plus: PolyF64::plus,
    negate: PolyF64::neg,
};

/// The polynomial ring operations as a zero-sized strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolyWitness;

impl RingWitness for PolyWitness {
    type Elem = PolyF64;
    type Error = PolyError;

    fn add(&self, a: &PolyF64, b: &PolyF64) -> PolyF64 {
        a.add(b)
    }

    fn subtract(&self, a: &PolyF64, b: &PolyF64) -> PolyF64 {
        a.sub(b)
    }

    fn multiply(&self, a: &PolyF64, b: &PolyF64) -> Result<PolyF64, PolyError> {
        a.mul(b)
    }

    fn divide(&self, a: &PolyF64, b: &PolyF64) -> Result<PolyF64, PolyError> {
        a.div(b)
    }

    fn remainder(&self, a: &PolyF64, b: &PolyF64) -> Result<PolyF64, PolyError> {
        a.rem(b)
    }

    fn plus(&self, a: &PolyF64) -> PolyF64 {
        a.plus()
    }

    fn negate(&self, a: &PolyF64) -> PolyF64 {
        a.neg()
    }
}
