//! The breakpoint-merge engine.
//!
//! Every binary operation between two step functions funnels through
//! [`merge`]: intersect the two domains, take the union of the breakpoints
//! that survive inside the intersection, resolve both operands on each
//! resulting interval, apply the operator, canonicalize. The scalar and
//! array paths ([`scalar_map`], [`array_map`]) skip the engine entirely and
//! transform the value array with the breakpoints untouched.

use crate::error::{Result, StepFnError};
use crate::step::{Domain, StepFunction};

/// Combines two step functions with a pointwise binary operator.
///
/// The result lives on the intersection of the operand domains; fails with
/// [`StepFnError::DomainMismatch`] when that intersection is empty.
/// Breakpoints shared by both operands (exact float equality) collapse to
/// one entry of the merged grid. Values are constant on each half-open
/// interval, so each operand is resolved by lookup at the interval's left
/// endpoint, which lies inside both domains by construction.
pub(crate) fn merge(
    f: &StepFunction,
    g: &StepFunction,
    op: impl Fn(f64, f64) -> f64,
) -> Result<StepFunction> {
    let clipped = f
        .domain()
        .intersect(g.domain())
        .ok_or(StepFnError::DomainMismatch {
            left: f.domain(),
            right: g.domain(),
        })?;

    let grid = union_grid(f.breakpoints(), g.breakpoints(), clipped);
    let values = grid[..grid.len() - 1]
        .iter()
        .map(|&u| op(f.value_unchecked(u), g.value_unchecked(u)))
        .collect();
    Ok(StepFunction::from_parts(grid, values))
}

/// Sorted union of two strictly increasing breakpoint arrays, clipped to
/// `within`: every point of either array that falls strictly inside the
/// interval, bracketed by the interval's endpoints.
fn union_grid(fx: &[f64], gx: &[f64], within: Domain) -> Vec<f64> {
    let mut grid = Vec::with_capacity(fx.len() + gx.len());
    grid.push(within.lo());

    let (mut i, mut j) = (0, 0);
    loop {
        let next = match (fx.get(i), gx.get(j)) {
            (Some(&a), Some(&b)) => {
                if a <= b {
                    i += 1;
                }
                if b <= a {
                    j += 1;
                }
                a.min(b)
            }
            (Some(&a), None) => {
                i += 1;
                a
            }
            (None, Some(&b)) => {
                j += 1;
                b
            }
            (None, None) => break,
        };
        if within.lo() < next && next < within.hi() {
            grid.push(next);
        }
    }

    grid.push(within.hi());
    grid
}

/// Applies `op(value, c)` to every step value, keeping the breakpoints.
///
/// Canonicalization may still shrink the result: multiplying by zero, for
/// one, collapses everything to a single interval.
pub(crate) fn scalar_map(f: &StepFunction, c: f64, op: impl Fn(f64, f64) -> f64) -> StepFunction {
    let values = f.values().iter().map(|&y| op(y, c)).collect();
    StepFunction::from_parts(f.breakpoints().to_vec(), values)
}

/// Applies `op(value, a[k])` step by step; the array must hold exactly `K`
/// entries.
pub(crate) fn array_map(
    f: &StepFunction,
    a: &[f64],
    op: impl Fn(f64, f64) -> f64,
) -> Result<StepFunction> {
    if a.len() != f.num_steps() {
        return Err(StepFnError::UnsupportedOperand {
            len: a.len(),
            expected: f.num_steps(),
        });
    }
    let values = f.values().iter().zip(a).map(|(&y, &c)| op(y, c)).collect();
    Ok(StepFunction::from_parts(f.breakpoints().to_vec(), values))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;
    const NEG_INF: f64 = f64::NEG_INFINITY;

    fn sf(x: &[f64], y: &[f64]) -> StepFunction {
        StepFunction::new(x.to_vec(), y.to_vec()).unwrap()
    }

    #[test]
    fn test_union_grid_interleaves_and_dedups() {
        let grid = union_grid(
            &[NEG_INF, -1.0, 1.0, INF],
            &[NEG_INF, -1.0, 0.5, 1.0, INF],
            Domain::new(NEG_INF, INF),
        );
        assert_eq!(grid, vec![NEG_INF, -1.0, 0.5, 1.0, INF]);
    }

    #[test]
    fn test_union_grid_clips_to_intersection() {
        let grid = union_grid(
            &[0.0, 2.0, 4.0],
            &[1.0, 3.0, 5.0],
            Domain::new(1.0, 4.0),
        );
        // 0.0 and 5.0 fall outside, 1.0 and 4.0 become the bracket.
        assert_eq!(grid, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_merge_on_partial_overlap() {
        let f = sf(&[0.0, 2.0, 4.0], &[1.0, 2.0]);
        let g = sf(&[1.0, 3.0, 5.0], &[10.0, 20.0]);
        let sum = merge(&f, &g, |a, b| a + b).unwrap();
        assert_eq!(sum.breakpoints(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sum.values(), &[11.0, 12.0, 22.0]);
    }

    #[test]
    fn test_merge_disjoint_domains_fails() {
        let f = sf(&[0.0, 1.0], &[1.0]);
        let g = sf(&[2.0, 3.0], &[1.0]);
        assert_eq!(
            merge(&f, &g, |a, b| a + b),
            Err(StepFnError::DomainMismatch {
                left: Domain::new(0.0, 1.0),
                right: Domain::new(2.0, 3.0),
            })
        );
    }

    #[test]
    fn test_merge_touching_domains_fail() {
        // [0, 1) and [1, 2) share the point 1 in neither domain.
        let f = sf(&[0.0, 1.0], &[1.0]);
        let g = sf(&[1.0, 2.0], &[1.0]);
        assert!(merge(&f, &g, |a, b| a + b).is_err());
    }

    #[test]
    fn test_merge_result_is_canonical() {
        let f = sf(&[NEG_INF, 0.0, INF], &[-1.0, 1.0]);
        // f * f is 1 everywhere; the breakpoint at 0 must vanish.
        let sq = merge(&f, &f, |a, b| a * b).unwrap();
        assert_eq!(sq, StepFunction::one());
    }

    #[test]
    fn test_scalar_map_keeps_breakpoints() {
        let f = sf(&[0.0, 1.0, 2.0], &[1.0, 2.0]);
        let doubled = scalar_map(&f, 2.0, |y, c| y * c);
        assert_eq!(doubled.breakpoints(), f.breakpoints());
        assert_eq!(doubled.values(), &[2.0, 4.0]);
    }

    #[test]
    fn test_scalar_map_can_collapse() {
        let f = sf(&[0.0, 1.0, 2.0], &[1.0, 2.0]);
        let zeroed = scalar_map(&f, 0.0, |y, c| y * c);
        assert_eq!(zeroed.breakpoints(), &[0.0, 2.0]);
        assert_eq!(zeroed.values(), &[0.0]);
    }

    #[test]
    fn test_array_map_requires_matching_length() {
        let f = sf(&[0.0, 1.0, 2.0], &[1.0, 2.0]);
        let shifted = array_map(&f, &[10.0, 20.0], |y, c| y + c).unwrap();
        assert_eq!(shifted.values(), &[11.0, 22.0]);

        assert_eq!(
            array_map(&f, &[1.0, 2.0, 3.0], |y, c| y + c),
            Err(StepFnError::UnsupportedOperand {
                len: 3,
                expected: 2,
            })
        );
    }
}
