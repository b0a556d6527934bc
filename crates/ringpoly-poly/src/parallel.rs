//! Parallel polynomial multiplication.
//!
//! Each output coefficient is computed independently on the rayon pool.
//! Products for one coefficient are accumulated in increasing order of
//! the left operand's index, which is the order the schoolbook loop uses,
//! so both paths round identically.

use rayon::prelude::*;

/// Convolves two non-empty coefficient slices.
pub(crate) fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = a.len() + b.len() - 1;

    (0..len)
        .into_par_iter()
        .map(|k| {
            let lo = k.saturating_sub(b.len() - 1);
            let hi = k.min(a.len() - 1);
            let mut acc = 0.0;
            for i in lo..=hi {
                acc += a[i] * b[k - i];
            }
            acc
        })
        .collect()
}
