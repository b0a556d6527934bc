//! Human-readable rendering of polynomials.
//!
//! This is a diagnostic format, not a parse format. Terms are written from
//! the highest degree down and wrapped in parentheses:
//!
//! ```text
//! [1.0, 0.0, -2.0, 1.0]  =>  (x^3 + -2.0*x^2 + 1.0)
//! ```

use std::fmt;

use crate::dense::PolyF64;

impl fmt::Display for PolyF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = match self.as_slice() {
            [] => return write!(f, "0"),
            [c] => return write!(f, "{c:?}"),
            coeffs => coeffs,
        };

        f.write_str("(")?;
        let mut first = true;
        for (i, &c) in coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            match (i, c == 1.0) {
                (0, _) => write!(f, "{c:?}")?,
                (1, true) => f.write_str("x")?,
                (1, false) => write!(f, "{c:?}*x")?,
                (_, true) => write!(f, "x^{i}")?,
                (_, false) => write!(f, "{c:?}*x^{i}")?,
            }
        }
        f.write_str(")")
    }
}
