//! Half-open interval of the real line.

use std::fmt;

/// The support `[lo, hi)` of a step function.
///
/// Either endpoint may be infinite. `Domain` is a plain value used for
/// domain arithmetic and diagnostics; it does not itself require `lo < hi`,
/// because an empty intersection is exactly how overlap failures are
/// detected.
///
/// # Examples
///
/// ```
/// use stepfn_core::Domain;
///
/// let d = Domain::new(f64::NEG_INFINITY, 1.5);
/// assert!(d.contains(-1e300));
/// assert!(!d.contains(1.5)); // right-open
/// assert_eq!(d.to_string(), "[-inf, 1.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    /// Creates the interval `[lo, hi)`.
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Domain { lo, hi }
    }

    /// Returns the inclusive lower endpoint.
    #[inline]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the exclusive upper endpoint.
    #[inline]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the width `hi - lo` (infinite when either endpoint is).
    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns true when the interval contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.lo < self.hi)
    }

    /// Returns true when `z` lies inside `[lo, hi)`. NaN is never inside.
    #[inline]
    pub fn contains(&self, z: f64) -> bool {
        self.lo <= z && z < self.hi
    }

    /// Intersects two intervals, or `None` when they do not overlap.
    pub fn intersect(&self, other: Domain) -> Option<Domain> {
        let clipped = Domain::new(self.lo.max(other.lo), self.hi.min(other.hi));
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}
