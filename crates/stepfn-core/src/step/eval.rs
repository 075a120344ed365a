//! Point and batch evaluation.

use crate::error::{Result, StepFnError};
use crate::step::StepFunction;

impl StepFunction {
    /// Evaluates the function at `z`.
    ///
    /// Fails with [`StepFnError::OutOfDomain`] when `z` lies outside
    /// `[x_0, x_K)`; NaN is always outside. The lookup is a binary search
    /// over the breakpoints, `O(log K)` per point.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepfn_core::StepFunction;
    ///
    /// let f = StepFunction::new(vec![-1.0, 0.0, 1.0], vec![-1.0, 1.0])?;
    /// assert_eq!(f.value_at(-1.0)?, -1.0);
    /// assert_eq!(f.value_at(-0.0001)?, -1.0);
    /// assert_eq!(f.value_at(0.0)?, 1.0); // right-continuous at the jump
    /// assert!(f.value_at(1.0).is_err()); // the domain is right-open
    /// # Ok::<(), stepfn_core::StepFnError>(())
    /// ```
    pub fn value_at(&self, z: f64) -> Result<f64> {
        if !self.domain().contains(z) {
            return Err(StepFnError::OutOfDomain {
                point: z,
                domain: self.domain(),
            });
        }
        Ok(self.value_unchecked(z))
    }

    /// Evaluates a batch of query points, preserving input order.
    ///
    /// The whole call fails on the first out-of-domain point; no partial
    /// result is produced.
    pub fn values_at(&self, points: &[f64]) -> Result<Vec<f64>> {
        points.iter().map(|&z| self.value_at(z)).collect()
    }

    /// Interval lookup without the domain check. `z` must lie inside the
    /// domain; for any in-domain `z` the partition point is at least 1 and
    /// at most `K`, so the subtraction and the index both stay in range.
    #[inline]
    pub(crate) fn value_unchecked(&self, z: f64) -> f64 {
        let k = self.breakpoints().partition_point(|&x| x <= z) - 1;
        self.values()[k]
    }
}
