//! The step function value type and its algebra.
//!
//! A step function is stored as parallel breakpoint/value arrays held in
//! canonical form. Every operation produces a new function, either through
//! the breakpoint-merge engine (step x step) or through a value-array
//! transform (step x scalar, step x array). [`StepFunction`] is the entry
//! point; [`Domain`] and [`Operand`] are its supporting value types.

mod canonical;
mod domain;
mod eval;
mod function;
mod integrate;
mod merge;
mod operand;
mod ops;


pub use domain::Domain;
pub use function::StepFunction;
pub use operand::Operand;
