//! Arithmetic, comparison, and operator overloads.
//!
//! The fallible `try_*` methods are the primary surface; the `std::ops`
//! impls are thin sugar over them that panic with the underlying error
//! message, the way std's own integer arithmetic panics on overflow.
//! Ordering comparisons stay `try_*`-only: a silent `false` from `<` on
//! functions with different supports would swallow a precondition
//! violation, so `PartialOrd` is deliberately not implemented.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Pow;

use crate::error::{Result, StepFnError};
use crate::step::{merge, Operand, StepFunction};

impl StepFunction {
    /// Adds an operand: pointwise over the domain intersection for another
    /// step function, against the value array for a scalar or per-step
    /// array.
    ///
    /// ```
    /// use stepfn_core::StepFunction;
    ///
    /// let f = StepFunction::heaviside();
    /// assert_eq!(f.try_add(&f)?.values(), &[0.0, 2.0]);
    /// assert_eq!(f.try_add(1.0)?.values(), &[1.0, 2.0]);
    /// assert_eq!(f.try_add(&[3.0, -1.0])?.values(), &[3.0, 0.0]);
    /// # Ok::<(), stepfn_core::StepFnError>(())
    /// ```
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<StepFunction> {
        self.binary_op(rhs.into(), |a, b| a + b)
    }

    /// Subtracts an operand.
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<StepFunction> {
        self.binary_op(rhs.into(), |a, b| a - b)
    }

    /// Multiplies by an operand.
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<StepFunction> {
        self.binary_op(rhs.into(), |a, b| a * b)
    }

    /// Divides by an operand.
    ///
    /// Division by a zero value follows IEEE semantics (`±inf` or NaN); it
    /// does not fail.
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<StepFunction> {
        self.binary_op(rhs.into(), |a, b| a / b)
    }

    /// Raises to an operand power, `powf` on every interval.
    pub fn try_pow<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<StepFunction> {
        self.binary_op(rhs.into(), f64::powf)
    }

    fn binary_op(&self, rhs: Operand<'_>, op: impl Fn(f64, f64) -> f64) -> Result<StepFunction> {
        match rhs {
            Operand::Step(g) => merge::merge(self, g, op),
            Operand::Scalar(c) => Ok(merge::scalar_map(self, c, op)),
            Operand::Array(a) => merge::array_map(self, a, op),
        }
    }

    /// Absolute value of every step.
    pub fn abs(&self) -> StepFunction {
        self.map_values(f64::abs)
    }

    /// Integer power of every step.
    pub fn powi(&self, n: i32) -> StepFunction {
        self.map_values(|y| y.powi(n))
    }

    /// Real power of every step.
    pub fn powf(&self, p: f64) -> StepFunction {
        self.map_values(|y| y.powf(p))
    }

    /// Reciprocal `1 / f`, IEEE semantics on zero values.
    pub fn recip(&self) -> StepFunction {
        self.map_values(f64::recip)
    }

    /// Transforms the value array elementwise; breakpoints stay put, the
    /// result is canonicalized (a transform can create new adjacent
    /// equalities, e.g. squaring a `±1` function).
    fn map_values(&self, op: impl Fn(f64) -> f64) -> StepFunction {
        let values = self.values().iter().map(|&y| op(y)).collect();
        StepFunction::from_parts(self.breakpoints().to_vec(), values)
    }

    /// Strictly-greater comparison: true when `self` exceeds `other` on
    /// every interval.
    ///
    /// Ordering is only defined across identical supports; fails with
    /// [`StepFnError::SupportMismatch`] otherwise. Intervals where the
    /// difference is NaN compare as not-greater.
    pub fn try_gt(&self, other: &StepFunction) -> Result<bool> {
        self.compare(other, |d| d > 0.0)
    }

    /// Greater-or-equal comparison across identical supports.
    pub fn try_ge(&self, other: &StepFunction) -> Result<bool> {
        self.compare(other, |d| d >= 0.0)
    }

    /// Strictly-less comparison across identical supports.
    pub fn try_lt(&self, other: &StepFunction) -> Result<bool> {
        other.try_gt(self)
    }

    /// Less-or-equal comparison across identical supports.
    pub fn try_le(&self, other: &StepFunction) -> Result<bool> {
        other.try_ge(self)
    }

    fn compare(&self, other: &StepFunction, pred: impl Fn(f64) -> bool) -> Result<bool> {
        if !self.same_support(other) {
            return Err(StepFnError::SupportMismatch {
                left: self.domain(),
                right: other.domain(),
            });
        }
        let diff = merge::merge(self, other, |a, b| a - b)?;
        Ok(diff.values().iter().all(|&d| pred(d)))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $try_method:ident) => {
        impl<'a, T: Into<Operand<'a>>> $trait<T> for &StepFunction {
            type Output = StepFunction;

            /// # Panics
            ///
            /// Panics when the operand is rejected (non-overlapping domains
            /// or an array length mismatch); use the `try_` counterpart to
            /// handle those as errors.
            fn $method(self, rhs: T) -> StepFunction {
                self.$try_method(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<'a, T: Into<Operand<'a>>> $trait<T> for StepFunction {
            type Output = StepFunction;

            fn $method(self, rhs: T) -> StepFunction {
                (&self).$method(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);
impl_binary_op!(Div, div, try_div);

macro_rules! impl_scalar_lhs {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&StepFunction> for f64 {
            type Output = StepFunction;

            fn $method(self, rhs: &StepFunction) -> StepFunction {
                merge::scalar_map(rhs, self, $op)
            }
        }

        impl $trait<StepFunction> for f64 {
            type Output = StepFunction;

            fn $method(self, rhs: StepFunction) -> StepFunction {
                self.$method(&rhs)
            }
        }
    };
}

// scalar_map hands each closure (value, scalar); the scalar is the left
// operand here, so the non-commutative ones flip.
impl_scalar_lhs!(Add, add, |y, c| c + y);
impl_scalar_lhs!(Sub, sub, |y, c| c - y);
impl_scalar_lhs!(Mul, mul, |y, c| c * y);
impl_scalar_lhs!(Div, div, |y, c| c / y);

impl Neg for &StepFunction {
    type Output = StepFunction;

    fn neg(self) -> StepFunction {
        self.map_values(|y| -y)
    }
}

impl Neg for StepFunction {
    type Output = StepFunction;

    fn neg(self) -> StepFunction {
        -&self
    }
}

impl Pow<f64> for &StepFunction {
    type Output = StepFunction;

    fn pow(self, rhs: f64) -> StepFunction {
        self.powf(rhs)
    }
}

impl Pow<i32> for &StepFunction {
    type Output = StepFunction;

    fn pow(self, rhs: i32) -> StepFunction {
        self.powi(rhs)
    }
}

impl Pow<&StepFunction> for &StepFunction {
    type Output = StepFunction;

    /// # Panics
    ///
    /// Panics when the domains do not overlap; use
    /// [`StepFunction::try_pow`] to handle the error.
    fn pow(self, rhs: &StepFunction) -> StepFunction {
        self.try_pow(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Pow;

    use super::*;

    const INF: f64 = f64::INFINITY;
    const NEG_INF: f64 = f64::NEG_INFINITY;

    fn sf(x: &[f64], y: &[f64]) -> StepFunction {
        StepFunction::new(x.to_vec(), y.to_vec()).unwrap()
    }

    #[test]
    fn test_operator_sugar_matches_try_methods() {
        let f = sf(&[NEG_INF, 0.0, INF], &[1.0, 3.0]);
        let g = sf(&[NEG_INF, 1.0, INF], &[10.0, 20.0]);
        assert_eq!(&f + &g, f.try_add(&g).unwrap());
        assert_eq!(&f - &g, f.try_sub(&g).unwrap());
        assert_eq!(&f * &g, f.try_mul(&g).unwrap());
        assert_eq!(&f / &g, f.try_div(&g).unwrap());
        // Owned left-hand sides delegate to the borrowed impls.
        assert_eq!(f.clone() + &g, &f + &g);
        assert_eq!(f.clone() * 2.0, &f * 2.0);
    }

    #[test]
    fn test_scalar_left_hand_side() {
        let f = sf(&[NEG_INF, 0.0, INF], &[1.0, 4.0]);
        assert_eq!((2.0 + &f).values(), &[3.0, 6.0]);
        assert_eq!((2.0 - &f).values(), &[1.0, -2.0]);
        assert_eq!((2.0 * &f).values(), &[2.0, 8.0]);
        assert_eq!((2.0 / &f).values(), &[2.0, 0.5]);
        assert_eq!(0.0 * &f, StepFunction::zero());
    }

    #[test]
    fn test_neg() {
        let f = sf(&[NEG_INF, 0.0, INF], &[1.0, -2.0]);
        assert_eq!((-&f).values(), &[-1.0, 2.0]);
        assert_eq!(-(-&f), f);
    }

    #[test]
    fn test_pow_trait() {
        let f = sf(&[NEG_INF, 0.0, INF], &[4.0, 9.0]);
        assert_eq!((&f).pow(2).values(), &[16.0, 81.0]);
        assert_eq!((&f).pow(0.5).values(), &[2.0, 3.0]);
        let two = StepFunction::constant(2.0);
        assert_eq!((&f).pow(&two).values(), &[16.0, 81.0]);
    }

    #[test]
    fn test_unary_helpers() {
        let f = sf(&[NEG_INF, 0.0, INF], &[-1.0, 1.0]);
        assert_eq!(f.abs(), StepFunction::one());
        assert_eq!(f.powi(2), StepFunction::one());
        assert_eq!(f.recip(), f);
        assert_eq!(sf(&[0.0, 1.0], &[4.0]).recip().values(), &[0.25]);
    }

    #[test]
    fn test_comparisons_require_identical_support() {
        let f = sf(&[0.0, 1.0], &[2.0]);
        let g = sf(&[0.0, 2.0], &[1.0]);
        assert_eq!(
            f.try_gt(&g),
            Err(StepFnError::SupportMismatch {
                left: f.domain(),
                right: g.domain(),
            })
        );
        // Equality stays total: different supports are just unequal.
        assert_ne!(f, g);
    }

    #[test]
    fn test_comparison_semantics() {
        let one = StepFunction::one();
        let zero = StepFunction::zero();
        let h = StepFunction::heaviside();

        assert!(one.try_gt(&zero).unwrap());
        assert!(zero.try_lt(&one).unwrap());
        assert!(one.try_ge(&one).unwrap());
        assert!(!one.try_gt(&one).unwrap());
        // h touches both 0 and 1, so only the weak orders hold.
        assert!(h.try_ge(&zero).unwrap());
        assert!(!h.try_gt(&zero).unwrap());
        assert!(h.try_le(&one).unwrap());
        assert!(!h.try_lt(&one).unwrap());
    }

    #[test]
    fn test_nan_difference_is_not_greater() {
        // inf - inf is NaN on the whole interval.
        let f = sf(&[0.0, 1.0], &[INF]);
        assert!(!f.try_gt(&f).unwrap());
        let zero_there = StepFunction::zero().restrict(0.0, 1.0).unwrap();
        assert!(!f.try_sub(&f).unwrap().try_ge(&zero_there).unwrap());
    }

    #[test]
    #[should_panic(expected = "domains do not overlap")]
    fn test_operator_sugar_panics_on_disjoint_domains() {
        let f = sf(&[0.0, 1.0], &[1.0]);
        let g = sf(&[2.0, 3.0], &[1.0]);
        let _ = &f + &g;
    }

    #[test]
    #[should_panic(expected = "Unsupported operand")]
    fn test_operator_sugar_panics_on_bad_array_length() {
        let f = sf(&[0.0, 1.0, 2.0], &[1.0, 2.0]);
        let _ = &f + &[1.0, 2.0, 3.0];
    }
}
