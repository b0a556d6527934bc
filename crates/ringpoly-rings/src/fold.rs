//! Folds over any ring witness.

use crate::traits::RingWitness;

/// Sums `items` starting from `zero`.
pub fn sum<'a, W, I>(witness: &W, zero: W::Elem, items: I) -> W::Elem
where
    W: RingWitness,
    W::Elem: 'a,
    I: IntoIterator<Item = &'a W::Elem>,
{
    items
        .into_iter()
        .fold(zero, |acc, item| witness.add(&acc, item))
}

/// Multiplies `items` starting from `one`.
///
/// # Errors
///
/// Stops at and returns the first error raised by `multiply`.
pub fn product<'a, W, I>(witness: &W, one: W::Elem, items: I) -> Result<W::Elem, W::Error>
where
    W: RingWitness,
    W::Elem: 'a,
    I: IntoIterator<Item = &'a W::Elem>,
{
    items
        .into_iter()
        .try_fold(one, |acc, item| witness.multiply(&acc, item))
}
