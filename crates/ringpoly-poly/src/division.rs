//! Polynomial long division.
//!
//! Classical division by repeatedly cancelling the leading term of the
//! running remainder. There is no pivoting and no treatment of tiny
//! leading coefficients: rounding in the divisor's leading coefficient
//! flows into every quotient term.

use crate::dense::PolyF64;
use crate::error::PolyError;

impl PolyF64 {
    /// Computes the quotient and remainder of division.
    ///
    /// The remainder always has lower degree than `divisor`.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let d = divisor.as_slice();
        let Some((&d_lead, d_rest)) = d.split_last() else {
            return Err(PolyError::DivideByZero);
        };

        if self.len() < d.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = vec![0.0; self.len() - d.len() + 1];
        let mut rem = self.as_slice().to_vec();

        while rem.len() >= d.len() {
            let shift = rem.len() - d.len();
            let lead = rem[rem.len() - 1] / d_lead;
            quotient[shift] = lead;

            for (j, &dj) in d_rest.iter().enumerate() {
                rem[shift + j] -= lead * dj;
            }

            // The leading slot is cancelled by construction; drop it rather
            // than trusting lead * d_lead to reproduce it exactly.
            rem.pop();
            while rem.last().is_some_and(|c| *c == 0.0) {
                rem.pop();
            }

            log::trace!("div_rem: x^{shift} term {lead}, remainder length {}", rem.len());
        }

        Ok((Self::canonical(quotient), Self::canonical(rem)))
    }

    /// Computes the quotient of division.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if `divisor` is the zero polynomial.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Computes the remainder of division.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if `divisor` is the zero polynomial.
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}
