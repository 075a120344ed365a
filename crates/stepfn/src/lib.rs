//! stepfn - Step function algebra for Rust
//!
//! Canonical piecewise-constant, right-continuous functions on the real
//! line, closed under arithmetic. A [`StepFunction`] is a value: build one
//! from breakpoints and step values (or with a [builder](crate::builders)),
//! combine it with other functions, scalars or per-step arrays, evaluate it
//! anywhere in its domain, and integrate it, infinite tails included.
//!
//! # Example
//!
//! ```
//! use stepfn::prelude::*;
//!
//! // A piecewise tariff: 5 below 100 units, 3 from there on.
//! let tariff = StepFunction::new(vec![0.0, 100.0, f64::INFINITY], vec![5.0, 3.0])?;
//!
//! // Half price across the board.
//! let discounted = &tariff * 0.5;
//! assert_eq!(discounted.values(), &[2.5, 1.5]);
//!
//! // Cost of the band between 50 and 150 units at the discounted rate.
//! assert_eq!(discounted.integral_between(50.0, 150.0)?, 2.5 * 50.0 + 1.5 * 50.0);
//! # Ok::<(), StepFnError>(())
//! ```
//!
//! Binary operations between two step functions live on the intersection
//! of their domains and fail fast when that intersection is empty. The
//! panicking `std::ops` sugar (`&f + &g`, `2.0 * &f`) sits on top of the
//! fallible `try_*` methods; use whichever fits the call site.

pub use stepfn_core::{Domain, Operand, Result, StepFnError, StepFunction};

pub mod builders;

/// Common imports for working with step functions.
///
/// ```
/// use stepfn::prelude::*;
///
/// let f = indicator(0.0, 1.0)?;
/// assert_eq!(f.integral(), 1.0);
/// # Ok::<(), StepFnError>(())
/// ```
pub mod prelude {
    pub use crate::builders::{ecdf, heaviside, indicator};
    pub use crate::{Domain, Operand, StepFnError, StepFunction};
}
