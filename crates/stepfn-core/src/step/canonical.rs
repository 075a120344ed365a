//! Canonical-form reduction for breakpoint/value pairs.
//!
//! The stored form of a step function has no adjacent equal values, so a
//! given piecewise map has exactly one representation and `==` on the
//! arrays decides function equality. Every constructor funnels its
//! tentative pair through [`compress`] before wrapping it.

/// Collapses each run of exactly-equal adjacent values into a single
/// interval, dropping the breakpoints between them.
///
/// Exact IEEE `==` decides equality: `-0.0` merges with `0.0`, NaN never
/// merges with anything (itself included). One left-to-right pass handles
/// runs of any length. The pair must already be well-formed: `K + 1`
/// strictly increasing breakpoints against `K >= 1` values.
pub(crate) fn compress(breakpoints: &mut Vec<f64>, values: &mut Vec<f64>) {
    debug_assert_eq!(breakpoints.len(), values.len() + 1);
    debug_assert!(!values.is_empty());

    let last = breakpoints[values.len()];
    let mut kept = 1;
    for k in 1..values.len() {
        if values[k] != values[kept - 1] {
            values[kept] = values[k];
            breakpoints[kept] = breakpoints[k];
            kept += 1;
        }
    }
    values.truncate(kept);
    breakpoints.truncate(kept + 1);
    breakpoints[kept] = last;
}
