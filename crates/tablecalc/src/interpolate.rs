//! Linear interpolation over a [`NumericTable`].
//!
//! An exact key match returns the stored value unchanged. Otherwise the two
//! bracketing keys `x0 < x < x1` are located with lower/upper-bound searches
//! and blended linearly:
//!
//! ```text
//! y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
//! ```
//!
//! Queries outside `[min_key, max_key]` fail under [`Policy::Strict`] and
//! clamp to the boundary value under [`Policy::Lenient`].
//!
//! # Example
//!
//! ```
//! use tablecalc::{interpolate, Policy, CalcError, U};
//!
//! assert_eq!(interpolate(&U, 0.0, Policy::Strict), Ok(1.0039));
//! assert_eq!(interpolate(&U, 5.25, Policy::Lenient), Ok(1.2338));
//! assert_eq!(
//!     interpolate(&U, 5.25, Policy::Strict),
//!     Err(CalcError::Range { value: 5.25 })
//! );
//! ```

use crate::config::Policy;
use crate::error::CalcError;
use crate::tables::NumericTable;

/// Interpolates `table` at `x` under `policy`.
///
/// # Errors
///
/// - [`CalcError::Range`] if `x` is outside the key span and `policy` is strict.
/// - [`CalcError::Lookup`] if no bracketing interval exists (empty table or
///   non-finite `x`).
pub fn interpolate(table: &NumericTable, x: f64, policy: Policy) -> Result<f64, CalcError> {
    let entries = table.entries();
    let (Some(&(min_key, min_val)), Some(&(max_key, max_val))) = (entries.first(), entries.last())
    else {
        return Err(CalcError::Lookup { value: x });
    };

    if x < min_key || x > max_key {
        return match policy {
            Policy::Strict => Err(CalcError::Range { value: x }),
            Policy::Lenient => {
                let clamped = if x < min_key { min_val } else { max_val };
                log::warn!(
                    "{}({x}) outside [{min_key}, {max_key}], clamped to {clamped}",
                    table.name()
                );
                Ok(clamped)
            }
        };
    }

    // Lower bound: first key >= x.
    let lower = entries.partition_point(|&(k, _)| k < x);
    if let Some(&(k, v)) = entries.get(lower) {
        if k == x {
            log::debug!("{}({x}) = {v} (table hit)", table.name());
            return Ok(v);
        }
    }

    // Upper bound: first key > x.
    let upper = entries.partition_point(|&(k, _)| k <= x);
    if upper == 0 || upper == entries.len() {
        return Err(CalcError::Lookup { value: x });
    }

    let (x0, y0) = entries[upper - 1];
    let (x1, y1) = entries[upper];
    let y = y0 + (y1 - y0) * (x - x0) / (x1 - x0);
    log::debug!("{}({x}) = {y} (between {x0} and {x1})", table.name());
    Ok(y)
}
