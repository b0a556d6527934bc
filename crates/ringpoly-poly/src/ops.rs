//! Operator overloads and standard trait impls for `PolyF64`.
//!
//! Multiplication and division can fail, so only the total operations
//! (`+`, `-`, unary `-`) get operator syntax.

use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

use crate::dense::PolyF64;
use crate::error::PolyError;

impl Hash for PolyF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let coeffs = self.as_slice();
        coeffs.len().hash(state);
        for c in coeffs {
            // -0.0 == 0.0, so both must hash alike.
            let bits = if *c == 0.0 { 0u64 } else { c.to_bits() };
            bits.hash(state);
        }
    }
}

impl Add for PolyF64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        PolyF64::add(&self, &rhs)
    }
}

impl<'a> Add<&'a PolyF64> for &'a PolyF64 {
    type Output = PolyF64;

    fn add(self, rhs: &'a PolyF64) -> Self::Output {
        PolyF64::add(self, rhs)
    }
}

impl Sub for PolyF64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PolyF64::sub(&self, &rhs)
    }
}

impl<'a> Sub<&'a PolyF64> for &'a PolyF64 {
    type Output = PolyF64;

    fn sub(self, rhs: &'a PolyF64) -> Self::Output {
        PolyF64::sub(self, rhs)
    }
}

impl Neg for PolyF64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        PolyF64::neg(&self)
    }
}

impl Neg for &PolyF64 {
    type Output = PolyF64;

    fn neg(self) -> Self::Output {
        PolyF64::neg(self)
    }
}

impl num_traits::Zero for PolyF64 {
    fn zero() -> Self {
        PolyF64::zero()
    }

    fn is_zero(&self) -> bool {
        PolyF64::is_zero(self)
    }
}

impl From<f64> for PolyF64 {
    fn from(value: f64) -> Self {
        Self::from_constant(value)
    }
}

impl TryFrom<&[f64]> for PolyF64 {
    type Error = PolyError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::from_coefficients(value)
    }
}

impl TryFrom<Vec<f64>> for PolyF64 {
    type Error = PolyError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_coefficients(&value)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHasher;

    use super::*;

    fn fx_hash(p: &PolyF64) -> u64 {
        let mut hasher = FxHasher::default();
        p.hash(&mut hasher);
        hasher.finish()
    }

    fn poly(coeffs: &[f64]) -> PolyF64 {
        PolyF64::from_coefficients(coeffs).unwrap()
    }

    #[test]
    fn test_operators_match_methods() {
        let p = poly(&[1.0, 2.0, 3.0]);
        let q = poly(&[0.5, -2.0]);

        assert_eq!(&p + &q, PolyF64::add(&p, &q));
        assert_eq!(&p - &q, PolyF64::sub(&p, &q));
        assert_eq!(-&p, PolyF64::neg(&p));
        assert_eq!(p.clone() + q.clone() - q, p);
    }

    #[test]
    fn test_signed_zero_hashes_alike() {
        let a = poly(&[0.0, 1.0]);
        let b = poly(&[-0.0, 1.0]);
        assert_eq!(a, b);
        assert_eq!(fx_hash(&a), fx_hash(&b));
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(fx_hash(&poly(&[1.0, 2.0])), fx_hash(&poly(&[2.0, 1.0])));
    }

    #[test]
    fn test_nan_is_never_equal() {
        let p = poly(&[f64::NAN, 1.0]);
        assert_ne!(p, p.clone());
    }

    #[test]
    fn test_num_traits_zero() {
        use num_traits::Zero;

        let z = <PolyF64 as Zero>::zero();
        assert!(Zero::is_zero(&z));
        assert_eq!(z.coefficients(), vec![0.0]);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(PolyF64::from(0.0), PolyF64::zero());
        assert_eq!(PolyF64::from(2.0).degree(), 0);
        assert_eq!(
            PolyF64::try_from(vec![1.0, 0.0]).unwrap(),
            PolyF64::from(1.0)
        );
        assert!(PolyF64::try_from(Vec::new()).is_err());
        assert!(PolyF64::try_from(&[1.0, 2.0][..]).is_ok());
    }
}
