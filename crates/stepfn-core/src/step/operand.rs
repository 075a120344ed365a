//! Operand kinds for binary operations.

use crate::step::StepFunction;

/// Right-hand operand of a binary operation, resolved once at the call
/// boundary.
///
/// Each kind takes a different path through the engine:
/// [`Operand::Step`] goes through the breakpoint merge,
/// [`Operand::Scalar`] and [`Operand::Array`] transform the value array in
/// place of a merge and leave the breakpoints (and so the domain) alone.
///
/// Conversions exist from `&StepFunction`, from the common numeric
/// scalars, and from `f64` slices, vectors and arrays, so call sites read
/// `f.try_add(&g)`, `f.try_mul(2)`, `f.try_sub(&[1.0, 2.0])`.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// Another step function, combined through the merge engine.
    Step(&'a StepFunction),
    /// A scalar, applied against every step value.
    Scalar(f64),
    /// A per-step array; must hold exactly `K` entries.
    Array(&'a [f64]),
}

impl<'a> From<&'a StepFunction> for Operand<'a> {
    fn from(f: &'a StepFunction) -> Self {
        Operand::Step(f)
    }
}

impl From<f64> for Operand<'_> {
    fn from(c: f64) -> Self {
        Operand::Scalar(c)
    }
}

impl From<f32> for Operand<'_> {
    fn from(c: f32) -> Self {
        Operand::Scalar(c as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(c: i32) -> Self {
        Operand::Scalar(c as f64)
    }
}

impl From<i64> for Operand<'_> {
    fn from(c: i64) -> Self {
        Operand::Scalar(c as f64)
    }
}

impl From<u32> for Operand<'_> {
    fn from(c: u32) -> Self {
        Operand::Scalar(c as f64)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(a: &'a [f64]) -> Self {
        Operand::Array(a)
    }
}

impl<'a> From<&'a Vec<f64>> for Operand<'a> {
    fn from(a: &'a Vec<f64>) -> Self {
        Operand::Array(a)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(a: &'a [f64; N]) -> Self {
        Operand::Array(a)
    }
}
