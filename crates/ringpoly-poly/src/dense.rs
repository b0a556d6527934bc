//! Dense univariate polynomials over `f64`.
//!
//! Every polynomial is kept in canonical form: the zero polynomial owns no
//! coefficients at all, and any other polynomial has a nonzero leading
//! coefficient. Each constructor and each arithmetic result restores this
//! by stripping high-order zeros.

use crate::config::PolyConfig;
use crate::error::PolyError;

/// A dense univariate polynomial with `f64` coefficients.
///
/// Coefficients are stored in ascending degree order and are never
/// mutated after construction.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PolyF64 {
    /// Coefficients in ascending degree order.
    /// Invariant: empty for zero, otherwise the last entry is nonzero.
    coeffs: Box<[f64]>,
}

impl PolyF64 {
    /// Builds a polynomial from an owned buffer, stripping high-order zeros.
    ///
    /// Callers are responsible for the size limit.
    pub(crate) fn canonical(mut coeffs: Vec<f64>) -> Self {
        while coeffs.last().is_some_and(|c| *c == 0.0) {
            coeffs.pop();
        }
        Self {
            coeffs: coeffs.into_boxed_slice(),
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_constant(1.0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: Box::new([0.0, 1.0]),
        }
    }

    /// Creates a constant polynomial.
    ///
    /// Both `0.0` and `-0.0` give the zero polynomial.
    #[must_use]
    pub fn from_constant(c: f64) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        Self {
            coeffs: Box::new([c]),
        }
    }

    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// The input is copied; high-order zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `coeffs` is empty or holds more than
    /// [`DEFAULT_MAX_TERMS`](crate::config::DEFAULT_MAX_TERMS) entries.
    pub fn from_coefficients(coeffs: &[f64]) -> Result<Self, PolyError> {
        Self::from_coefficients_with(&PolyConfig::default(), coeffs)
    }

    /// Creates a polynomial from coefficients under a custom limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `coeffs` is empty or longer than
    /// `config.max_terms`.
    pub fn from_coefficients_with(config: &PolyConfig, coeffs: &[f64]) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::InvalidArgument(
                "coefficient sequence is empty".to_string(),
            ));
        }
        config.check_len(coeffs.len())?;

        if let [c] = coeffs {
            return Ok(Self::from_constant(*c));
        }
        Ok(Self::canonical(coeffs.to_vec()))
    }

    /// Creates the monomial c * x^n.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n + 1` exceeds the default limit.
    pub fn monomial(c: f64, n: usize) -> Result<Self, PolyError> {
        if c == 0.0 {
            return Ok(Self::zero());
        }
        PolyConfig::default().check_len(n.saturating_add(1))?;

        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Ok(Self {
            coeffs: coeffs.into_boxed_slice(),
        })
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree -1.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns the number of stored coefficients (degree + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if the degree is at most 0.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns the leading coefficient, or `None` for zero.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<f64> {
        self.coeffs.last().copied()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coefficient(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns a copy of the coefficients.
    ///
    /// The zero polynomial reports `[0.0]`.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        if self.is_zero() {
            return vec![0.0];
        }
        self.coeffs.to_vec()
    }

    /// Borrows the canonical coefficients (empty for zero).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.as_slice() {
            [] => 0.0,
            [c] => *c,
            [rest @ .., lead] => {
                let mut result = *lead;
                for &c in rest.iter().rev() {
                    result = c + x * result;
                }
                result
            }
        }
    }

    /// Adds two polynomials.
    ///
    /// Adding zero returns the other operand exactly.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = long.coeffs.to_vec();
        for (r, s) in result.iter_mut().zip(short.coeffs.iter()) {
            *r += *s;
        }

        Self::canonical(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        // Negation cannot create or remove zeros, so no renormalization.
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Unary plus.
    #[must_use]
    pub fn plus(&self) -> Self {
        self.clone()
    }

    /// Multiplies two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the product would exceed the default
    /// coefficient limit.
    pub fn mul(&self, other: &Self) -> Result<Self, PolyError> {
        self.mul_with(other, &PolyConfig::default())
    }

    /// Multiplies two polynomials under a custom configuration.
    ///
    /// A zero operand gives zero without touching the other operand's
    /// coefficients, so `0 * inf` never produces a NaN here. Constant
    /// operands take the scalar path. The general case is a direct
    /// convolution without compensated summation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the product would exceed
    /// `config.max_terms`.
    pub fn mul_with(&self, other: &Self, config: &PolyConfig) -> Result<Self, PolyError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        if let [s] = self.as_slice() {
            return Ok(other.scale(*s));
        }
        if let [s] = other.as_slice() {
            return Ok(self.scale(*s));
        }

        let len = self.len() + other.len() - 1;
        config.check_len(len)?;

        #[cfg(feature = "parallel")]
        if len >= config.parallel_threshold {
            return Ok(Self::canonical(crate::parallel::convolve(
                &self.coeffs,
                &other.coeffs,
            )));
        }

        Ok(self.mul_schoolbook(other))
    }

    /// Schoolbook multiplication: O(n²).
    pub(crate) fn mul_schoolbook(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::canonical(result)
    }

    /// Multiplies by a scalar.
    ///
    /// Scaling by `1.0` returns the polynomial unchanged; scaling by zero
    /// gives the zero polynomial.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        if c == 1.0 {
            return self.clone();
        }
        if c == 0.0 {
            return Self::zero();
        }
        Self::canonical(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();

        Self::canonical(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the result would exceed the default
    /// coefficient limit.
    pub fn shift(&self, n: usize) -> Result<Self, PolyError> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        PolyConfig::default().check_len(self.len().saturating_add(n))?;

        let mut coeffs = vec![0.0; n];
        coeffs.extend_from_slice(&self.coeffs);
        Ok(Self {
            coeffs: coeffs.into_boxed_slice(),
        })
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an intermediate product would exceed
    /// the default coefficient limit.
    pub fn pow(&self, n: u32) -> Result<Self, PolyError> {
        self.pow_with(n, &PolyConfig::default())
    }

    /// Raises the polynomial to a power under a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an intermediate product would exceed
    /// `config.max_terms`.
    pub fn pow_with(&self, n: u32, config: &PolyConfig) -> Result<Self, PolyError> {
        if n == 0 {
            return Ok(Self::one());
        }
        if n == 1 {
            return Ok(self.clone());
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_with(&base, config)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_with(&base, config)?;
            }
        }

        Ok(result)
    }
}
