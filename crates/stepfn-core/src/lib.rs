//! stepfn core - step function value type and breakpoint-merge engine
//!
//! This crate provides the fundamental pieces of stepfn:
//! - [`StepFunction`]: an immutable piecewise-constant, right-continuous
//!   function on a half-open interval of the real line, always held in
//!   canonical form
//! - The breakpoint-merge engine behind every binary operation between two
//!   step functions
//! - Point and batch evaluation, and Riemann integration that handles
//!   infinite domains
//! - [`Operand`]: the union of step/scalar/array right-hand operands
//!
//! Most users should depend on the `stepfn` facade crate instead, which
//! re-exports everything here alongside the builder helpers.

pub mod error;
pub mod step;

pub use error::{Result, StepFnError};
pub use step::{Domain, Operand, StepFunction};
