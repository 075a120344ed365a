//! Riemann integration.

use crate::error::Result;
use crate::step::StepFunction;

impl StepFunction {
    /// The Riemann integral `sum((x[k+1] - x[k]) * y[k])` over the whole
    /// domain.
    ///
    /// Intervals with value exactly 0 contribute 0 even when they are
    /// infinitely wide: nothing accumulates over a zero tail, so the
    /// `0 * inf` indeterminate never arises. A nonzero value on an infinite
    /// tail contributes `±inf`; opposite infinite contributions sum to NaN
    /// under ordinary float addition and are returned as such.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepfn_core::StepFunction;
    ///
    /// let f = StepFunction::new(
    ///     vec![f64::NEG_INFINITY, -1.0, 1.0, f64::INFINITY],
    ///     vec![0.0, 5.0, 0.0],
    /// )?;
    /// assert_eq!(f.integral(), 10.0);
    /// # Ok::<(), stepfn_core::StepFnError>(())
    /// ```
    pub fn integral(&self) -> f64 {
        let mut total = 0.0;
        for (k, &v) in self.values().iter().enumerate() {
            if v == 0.0 {
                continue;
            }
            total += (self.breakpoints()[k + 1] - self.breakpoints()[k]) * v;
        }
        total
    }

    /// Integrates over the window `[lo, hi)`: restriction followed by
    /// [`integral`](Self::integral). Fails when the window misses the
    /// domain entirely.
    pub fn integral_between(&self, lo: f64, hi: f64) -> Result<f64> {
        Ok(self.restrict(lo, hi)?.integral())
    }
}
