//! Error types for stepfn

use thiserror::Error;

use crate::step::Domain;

/// Main error type for step function operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StepFnError {
    /// Breakpoint and value arrays with incompatible lengths
    ///
    /// A step function with K steps is described by K + 1 breakpoints and
    /// K values, K >= 1.
    #[error("Arity mismatch: {breakpoints} breakpoint(s) cannot delimit {values} step value(s)")]
    ArityMismatch { breakpoints: usize, values: usize },

    /// Breakpoints that are not strictly increasing
    ///
    /// Also raised for NaN and for infinities in interior positions, since
    /// neither can sit inside a strictly increasing chain.
    #[error("Breakpoints must be strictly increasing: x[{index}] = {value} does not increase on its predecessor")]
    BreakpointOrder { index: usize, value: f64 },

    /// Operand domains with an empty intersection
    #[error("Step function domains do not overlap: {left} vs. {right}")]
    DomainMismatch { left: Domain, right: Domain },

    /// Ordering comparison across non-identical supports
    #[error("Step functions have different support: {left} vs. {right}")]
    SupportMismatch { left: Domain, right: Domain },

    /// Evaluation point outside the domain
    #[error("Point {point} is outside the domain {domain}")]
    OutOfDomain { point: f64, domain: Domain },

    /// Array operand whose length does not match the number of steps
    #[error("Unsupported operand: array of length {len} cannot combine with {expected} step value(s)")]
    UnsupportedOperand { len: usize, expected: usize },
}

/// Result type alias for step function operations
pub type Result<T> = std::result::Result<T, StepFnError>;
