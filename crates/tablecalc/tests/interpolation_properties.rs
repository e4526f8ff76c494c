//! Property-based tests for table interpolation.
//!
//! Uses proptest to check bracket bounds, exact key hits and boundary
//! behaviour under both lookup policies.

use proptest::prelude::*;
use tablecalc::{interpolate, CalcError, NumericTable, Policy, T, U};

fn tables() -> impl Strategy<Value = &'static NumericTable> {
    prop_oneof![Just(&U), Just(&T)]
}

fn bracket(table: &NumericTable, x: f64) -> Option<((f64, f64), (f64, f64))> {
    table
        .entries()
        .windows(2)
        .find(|w| w[0].0 < x && x < w[1].0)
        .map(|w| (w[0], w[1]))
}

// =============================================================================
// Exact hits
// =============================================================================

proptest! {
    /// Every stored key returns its stored value bit-for-bit.
    #[test]
    fn prop_key_hits_are_exact(table in tables(), idx in 0usize..21) {
        let (k, v) = table.entries()[idx];
        prop_assert_eq!(interpolate(table, k, Policy::Strict), Ok(v));
        prop_assert_eq!(interpolate(table, k, Policy::Lenient), Ok(v));
    }
}

// =============================================================================
// In-range blending
// =============================================================================

proptest! {
    /// Interpolated values lie between the bracketing values.
    #[test]
    fn prop_blend_within_bracket(table in tables(), t in 0.0f64..1.0) {
        let (lo, hi) = (table.entries()[0].0, table.entries()[20].0);
        let x = lo + (hi - lo) * t;
        let y = interpolate(table, x, Policy::Strict);
        prop_assert!(y.is_ok());
        let y = y.unwrap_or(f64::NAN);

        if let Some(((x0, y0), (x1, y1))) = bracket(table, x) {
            let (min, max) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            prop_assert!(min - 1e-12 <= y && y <= max + 1e-12,
                "{}({}) = {} not in [{}, {}]", table.name(), x, y, min, max);
            let expected = y0 + (y1 - y0) * (x - x0) / (x1 - x0);
            prop_assert_eq!(y, expected);
        }
    }

    /// Both policies agree inside the key span.
    #[test]
    fn prop_policies_agree_in_range(x in -5.0f64..=5.0) {
        prop_assert_eq!(
            interpolate(&U, x, Policy::Strict),
            interpolate(&U, x, Policy::Lenient)
        );
        prop_assert_eq!(
            interpolate(&T, x * 2.0, Policy::Strict),
            interpolate(&T, x * 2.0, Policy::Lenient)
        );
    }
}

// =============================================================================
// Out of range
// =============================================================================

proptest! {
    /// Strict: anything above the span is a range error carrying the query.
    #[test]
    fn prop_strict_rejects_above(table in tables(), d in 1e-6f64..1e6) {
        let x = table.entries()[20].0 + d;
        prop_assert_eq!(interpolate(table, x, Policy::Strict), Err(CalcError::Range { value: x }));
    }

    /// Strict: anything below the span is a range error carrying the query.
    #[test]
    fn prop_strict_rejects_below(table in tables(), d in 1e-6f64..1e6) {
        let x = table.entries()[0].0 - d;
        prop_assert_eq!(interpolate(table, x, Policy::Strict), Err(CalcError::Range { value: x }));
    }

    /// Lenient: out-of-span queries return the nearest boundary value.
    #[test]
    fn prop_lenient_clamps(table in tables(), d in 1e-6f64..1e6) {
        let (lo_k, lo_v) = table.entries()[0];
        let (hi_k, hi_v) = table.entries()[20];
        prop_assert_eq!(interpolate(table, hi_k + d, Policy::Lenient), Ok(hi_v));
        prop_assert_eq!(interpolate(table, lo_k - d, Policy::Lenient), Ok(lo_v));
    }
}
