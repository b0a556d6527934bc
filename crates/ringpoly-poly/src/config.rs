//! Construction limits for polynomials.

use crate::error::PolyError;

/// Default maximum number of coefficients in a polynomial.
pub const DEFAULT_MAX_TERMS: usize = 1000;

/// Default result length at which convolution goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Limits applied when constructing polynomials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyConfig {
    /// Maximum number of coefficients a polynomial may hold.
    pub max_terms: usize,
    /// Minimum product length for parallel multiplication.
    ///
    /// Only consulted with the `parallel` feature enabled.
    pub parallel_threshold: usize,
}

impl Default for PolyConfig {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PolyConfig {
    /// Creates a configuration with a custom coefficient limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `max_terms` is zero.
    pub fn with_max_terms(max_terms: usize) -> Result<Self, PolyError> {
        if max_terms == 0 {
            return Err(PolyError::InvalidArgument(
                "max_terms must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            max_terms,
            ..Self::default()
        })
    }

    /// Sets the parallel multiplication threshold.
    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<(), PolyError> {
        if len > self.max_terms {
            log::debug!(
                "rejecting polynomial with {len} coefficients (limit {})",
                self.max_terms
            );
            return Err(PolyError::too_many_terms(len, self.max_terms));
        }
        Ok(())
    }
}
