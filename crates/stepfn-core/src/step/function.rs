//! The step function value type.

use std::fmt;

use crate::error::{Result, StepFnError};
use crate::step::canonical;
use crate::step::Domain;

/// A real-valued step function: piecewise constant, right-continuous,
/// defined on the half-open interval `[x_0, x_K)`.
///
/// Stored as `K + 1` strictly increasing breakpoints `x` and `K` values
/// `y`, where `f(z) = y[k]` for `x[k] <= z < x[k+1]`. The first and last
/// breakpoints may be infinite, so a domain can cover the whole real line.
/// Instances are immutable and always canonical: no two adjacent values are
/// equal, a given piecewise map has exactly one representation, and `==`
/// decides pointwise function equality.
///
/// Canonicalization, breakpoint matching and equality all use exact IEEE
/// float comparison. Two breakpoints that differ by one ulp are two
/// distinct breakpoints; callers who compute breakpoints rather than write
/// them down must round before constructing.
///
/// # Examples
///
/// ```
/// use stepfn_core::StepFunction;
///
/// let f = StepFunction::new(
///     vec![f64::NEG_INFINITY, 0.0, f64::INFINITY],
///     vec![-1.0, 1.0],
/// )?;
/// assert_eq!(f.num_steps(), 2);
/// assert_eq!(f.value_at(-3.0)?, -1.0);
/// assert_eq!(f.value_at(0.0)?, 1.0);
/// # Ok::<(), stepfn_core::StepFnError>(())
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStepFunction", into = "RawStepFunction")
)]
pub struct StepFunction {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

impl StepFunction {
    /// Creates a step function from breakpoints `x` and values `y`.
    ///
    /// Requires `x.len() == y.len() + 1` with at least one step, and `x`
    /// strictly increasing. NaN and interior infinities are rejected along
    /// with out-of-order entries; the two end breakpoints may be
    /// `-inf` / `+inf`. The result is canonicalized, so the stored arrays
    /// may be shorter than the input:
    ///
    /// ```
    /// use stepfn_core::StepFunction;
    ///
    /// let f = StepFunction::new(vec![0.0, 1.0, 2.0], vec![5.0, 5.0])?;
    /// assert_eq!(f.breakpoints(), &[0.0, 2.0]);
    /// assert_eq!(f.values(), &[5.0]);
    /// # Ok::<(), stepfn_core::StepFnError>(())
    /// ```
    pub fn new(breakpoints: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() || breakpoints.len() != values.len() + 1 {
            return Err(StepFnError::ArityMismatch {
                breakpoints: breakpoints.len(),
                values: values.len(),
            });
        }
        for k in 1..breakpoints.len() {
            if !(breakpoints[k] > breakpoints[k - 1]) {
                return Err(StepFnError::BreakpointOrder {
                    index: k,
                    value: breakpoints[k],
                });
            }
        }
        Ok(Self::from_parts(breakpoints, values))
    }

    /// Wraps a pair already known to satisfy the shape and ordering
    /// requirements, canonicalizing it. Every internal producer of new
    /// functions lands here so that no non-canonical instance can escape.
    pub(crate) fn from_parts(mut breakpoints: Vec<f64>, mut values: Vec<f64>) -> Self {
        canonical::compress(&mut breakpoints, &mut values);
        StepFunction {
            breakpoints,
            values,
        }
    }

    /// The constant function `f(z) = c` on the whole real line.
    pub fn constant(c: f64) -> Self {
        StepFunction {
            breakpoints: vec![f64::NEG_INFINITY, f64::INFINITY],
            values: vec![c],
        }
    }

    /// The zero function, the additive identity.
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// The unit function, the multiplicative identity.
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// The Heaviside step: 0 below 0, 1 from 0 on.
    pub fn heaviside() -> Self {
        StepFunction {
            breakpoints: vec![f64::NEG_INFINITY, 0.0, f64::INFINITY],
            values: vec![0.0, 1.0],
        }
    }

    /// The number of steps `K`.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.values.len()
    }

    /// Read-only view of the `K + 1` breakpoints.
    #[inline]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Read-only view of the `K` step values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The domain `[x_0, x_K)`.
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain::new(self.breakpoints[0], self.breakpoints[self.values.len()])
    }

    /// Returns true when both functions are defined on the same interval.
    #[inline]
    pub fn same_support(&self, other: &StepFunction) -> bool {
        self.domain() == other.domain()
    }

    /// Iterates over `(interval, value)` pairs, left to right.
    ///
    /// ```
    /// use stepfn_core::{Domain, StepFunction};
    ///
    /// let f = StepFunction::new(vec![0.0, 1.0, 3.0], vec![2.0, 4.0])?;
    /// let steps: Vec<_> = f.steps().collect();
    /// assert_eq!(steps, vec![(Domain::new(0.0, 1.0), 2.0), (Domain::new(1.0, 3.0), 4.0)]);
    /// # Ok::<(), stepfn_core::StepFnError>(())
    /// ```
    pub fn steps(&self) -> impl Iterator<Item = (Domain, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(k, &v)| (Domain::new(self.breakpoints[k], self.breakpoints[k + 1]), v))
    }

    /// Restricts the function to the window `[lo, hi)`.
    ///
    /// The result's domain is the intersection of the window with the
    /// current domain. Fails with [`StepFnError::DomainMismatch`] when the
    /// two do not overlap.
    pub fn restrict(&self, lo: f64, hi: f64) -> Result<StepFunction> {
        let window = Domain::new(lo, hi);
        let clipped = self
            .domain()
            .intersect(window)
            .ok_or(StepFnError::DomainMismatch {
                left: self.domain(),
                right: window,
            })?;

        let mut breakpoints = Vec::with_capacity(self.breakpoints.len());
        breakpoints.push(clipped.lo());
        breakpoints.extend(
            self.breakpoints
                .iter()
                .copied()
                .filter(|&x| clipped.lo() < x && x < clipped.hi()),
        );
        breakpoints.push(clipped.hi());
        let values = breakpoints[..breakpoints.len() - 1]
            .iter()
            .map(|&u| self.value_unchecked(u))
            .collect();
        Ok(Self::from_parts(breakpoints, values))
    }
}

impl Default for StepFunction {
    /// The zero function.
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for StepFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepFunction(x={:?}, y={:?})", self.breakpoints, self.values)
    }
}

impl fmt::Display for StepFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, (interval, v)) in self.steps().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} on {}", v, interval)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "StepFunction")]
struct RawStepFunction {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStepFunction> for StepFunction {
    type Error = StepFnError;

    /// Deserialized pairs pass through the validating constructor, so a
    /// hand-edited document cannot smuggle in a non-canonical instance.
    fn try_from(raw: RawStepFunction) -> Result<Self> {
        StepFunction::new(raw.breakpoints, raw.values)
    }
}

#[cfg(feature = "serde")]
impl From<StepFunction> for RawStepFunction {
    fn from(f: StepFunction) -> Self {
        RawStepFunction {
            breakpoints: f.breakpoints,
            values: f.values,
        }
    }
}
