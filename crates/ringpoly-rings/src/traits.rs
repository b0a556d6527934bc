//! Ring operation strategy trait.
//!
//! A witness carries the arithmetic of an element type separately from
//! the type itself, so generic code can be handed "how to add, multiply
//! and divide" as a value.

/// The seven operations of a ring with Euclidean-style division.
///
/// # Laws
///
/// - `add` is associative and commutative
/// - `subtract(a, b) == add(a, negate(b))`
/// - `plus(a) == a`
/// - For non-zero `b`: `add(multiply(divide(a, b), b), remainder(a, b))`
///   reconstructs `a` up to the rounding of the element type
pub trait RingWitness {
    /// The element type the operations act on.
    type Elem;

    /// The error raised by fallible operations.
    type Error;

    /// Computes `a + b`.
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Computes `a - b`.
    fn subtract(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Computes `a * b`.
    ///
    /// # Errors
    ///
    /// Fails when the product cannot be represented by the element type.
    fn multiply(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error>;

    /// Computes the quotient of `a / b`.
    ///
    /// # Errors
    ///
    /// Fails when `b` is zero.
    fn divide(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error>;

    /// Computes the remainder of `a / b`.
    ///
    /// # Errors
    ///
    /// Fails when `b` is zero.
    fn remainder(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error>;

    /// Unary plus: returns `a` unchanged.
    fn plus(&self, a: &Self::Elem) -> Self::Elem;

    /// Computes `-a`.
    fn negate(&self, a: &Self::Elem) -> Self::Elem;
}

impl<W: RingWitness + ?Sized> RingWitness for &W {
    type Elem = W::Elem;
    type Error = W::Error;

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        (**self).add(a, b)
    }

    fn subtract(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        (**self).subtract(a, b)
    }

    fn multiply(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error> {
        (**self).multiply(a, b)
    }

    fn divide(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error> {
        (**self).divide(a, b)
    }

    fn remainder(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem, Self::Error> {
        (**self).remainder(a, b)
    }

    fn plus(&self, a: &Self::Elem) -> Self::Elem {
        (**self).plus(a)
    }

    fn negate(&self, a: &Self::Elem) -> Self::Elem {
        (**self).negate(a)
    }
}
