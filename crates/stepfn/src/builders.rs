//! Builders for common step function shapes.

use stepfn_core::{Result, StepFunction};

/// The indicator of `[lo, hi)`: 1 inside the window, 0 on the rest of the
/// real line.
///
/// `lo` and `hi` must be finite with `lo < hi`; anything else fails to form
/// a strictly increasing breakpoint chain and is rejected by the
/// constructor.
///
/// ```
/// use stepfn::builders::indicator;
///
/// let f = indicator(-1.0, 1.0)?;
/// assert_eq!(f.value_at(0.0)?, 1.0);
/// assert_eq!(f.value_at(1.0)?, 0.0);
/// assert_eq!(f.integral(), 2.0);
/// # Ok::<(), stepfn::StepFnError>(())
/// ```
pub fn indicator(lo: f64, hi: f64) -> Result<StepFunction> {
    StepFunction::new(
        vec![f64::NEG_INFINITY, lo, hi, f64::INFINITY],
        vec![0.0, 1.0, 0.0],
    )
}

/// The Heaviside step: 0 below 0, 1 from 0 on.
///
/// The same function as [`StepFunction::heaviside`], exposed here so the
/// builder module covers the common shapes in one place.
pub fn heaviside() -> StepFunction {
    StepFunction::heaviside()
}

/// The empirical CDF of a sample set: 0 below the smallest sample, a jump
/// of `1/n` at each sample (duplicates stack), 1 from the largest sample
/// on.
///
/// The samples need not be sorted. NaN samples are rejected by the
/// constructor, since NaN cannot be a breakpoint.
///
/// # Panics
///
/// Panics on an empty sample set; an ECDF with no jumps is not a step
/// function anyone means to build.
///
/// ```
/// use stepfn::builders::ecdf;
///
/// let f = ecdf(&[3.0, 1.0, 3.0, 2.0])?;
/// assert_eq!(f.value_at(0.5)?, 0.0);
/// assert_eq!(f.value_at(1.0)?, 0.25);
/// assert_eq!(f.value_at(2.5)?, 0.5);
/// assert_eq!(f.value_at(3.0)?, 1.0);
/// # Ok::<(), stepfn::StepFnError>(())
/// ```
pub fn ecdf(samples: &[f64]) -> Result<StepFunction> {
    assert!(!samples.is_empty(), "ecdf requires at least one sample");

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;

    let mut breakpoints = vec![f64::NEG_INFINITY];
    let mut values = vec![0.0];
    let mut i = 0;
    while i < sorted.len() {
        let sample = sorted[i];
        // Walk past duplicates; j then counts the samples <= sample.
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sample {
            j += 1;
        }
        breakpoints.push(sample);
        values.push(j as f64 / n);
        i = j;
    }
    breakpoints.push(f64::INFINITY);

    StepFunction::new(breakpoints, values)
}
