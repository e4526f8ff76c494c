//! Error taxonomy.
//!
//! [`CalcError`] covers table lookups during evaluation. [`DriverError`]
//! covers reading the inputs. Both render as the single bracketed line the
//! driver prints.

use std::fmt;

use thiserror::Error;

/// Magnitude at and above which numbers in diagnostics switch to exponent form.
const EXPONENT_ABOVE: f64 = 1e16;

/// Magnitude below which non-zero numbers in diagnostics switch to exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// A number as shown in a diagnostic: plain for ordinary magnitudes,
/// exponent form (`1e20`, `1.5e-7`) for very large or very small ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shown(pub f64);

fn shown(value: &f64) -> Shown {
    Shown(*value)
}

impl fmt::Display for Shown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if self.0.is_finite()
            && self.0 != 0.0
            && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW)
        {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A lookup failure raised while evaluating the formula chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Numeric query outside a table's key span (strict policy only).
    #[error("[Range error]: value {} is outside the permitted range.", shown(.value))]
    Range {
        /// The offending query.
        value: f64,
    },
    /// No bracketing interval could be found for the query.
    #[error("[Interpolation error]: no interval found for x = {}", shown(.value))]
    Lookup {
        /// The offending query.
        value: f64,
    },
    /// Text token absent from the text table (strict policy only).
    #[error("[Text error]: key \"{key}\" is not present in table Gtext.")]
    TextKey {
        /// The offending token.
        key: String,
    },
    /// A result overflowed to an infinity or NaN (reachable under the
    /// lenient policy, where huge inputs are clamped rather than rejected).
    #[error("[Overflow error]: {quantity} = {value} is not a finite number.")]
    NonFinite {
        /// Which result overflowed (`r`, `k` or `Variant(r, k)`).
        quantity: &'static str,
        /// The non-finite value.
        value: f64,
    },
}

/// A failure while acquiring the inputs.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Input ended before the named value was read.
    #[error("[Input error]: expected {what}, but input ended.")]
    MissingInput {
        /// Name of the value being read.
        what: &'static str,
    },
    /// Token could not be parsed as a real number.
    #[error("[Input error]: {what} must be a real number, got \"{token}\".")]
    InvalidNumber {
        /// Name of the value being read.
        what: &'static str,
        /// The token as read.
        token: String,
    },
    /// Parsed value is NaN or infinite.
    #[error("[Input error]: {what} must be finite, got {}.", shown(.value))]
    NonFinite {
        /// Name of the value being read.
        what: &'static str,
        /// The parsed value.
        value: f64,
    },
    /// Reading from the input stream failed.
    #[error("[Unexpected error]: {0}")]
    Io(#[from] std::io::Error),
}
