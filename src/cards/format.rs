//! Numeric field formatting for card lines.
//!
//! The engine is whitespace tolerant but counts fields, so the only hard rule is that every
//! value renders as a single token. Integer fields (tags, segment numbers, step counts, mode
//! flags) are printed as plain integers. Real fields use [`Real`]:
//!
//! - shortest decimal that round-trips to the same `f64`;
//! - always a fractional part for integral values (`100.0`, `59600000.0`, `-0.0`);
//! - exponent notation when `|x| < 1e-4` or `|x| >= 1e16`, written with an explicit sign and at
//!   least two exponent digits (`1e-10`, `1.5e-07`, `1e+16`).

use std::fmt;

use crate::math::Scalar;

/// Display adaptor for a real-valued card field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub Scalar);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` already yields the shortest round-trip digits with a forced fraction and
        // switches to exponent form at the same thresholds; only the exponent spelling differs.
        let repr = format!("{:?}", self.0);
        match repr.split_once('e') {
            None => f.write_str(&repr),
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
        }
    }
}

/// Formats a real-valued field.
#[must_use]
pub fn real(value: Scalar) -> String {
    Real(value).to_string()
}
