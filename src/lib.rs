//! Binomial proportion confidence intervals.
//!
//! Given `n` trials with `x` observed successes, every method returns the `(upper, lower)` bounds
//! of a 95% confidence interval on the true success probability:
//!
//! - [`wald()`]: the textbook normal approximation. Mostly useful as a comparison; it is not
//!   recommended for either small or large `n`.
//! - [`wald_adjusted()`]: Wald after adding two successes and two failures. Accurate for small `n`,
//!   and the best choice when `x / n` is near 0 or 1.
//! - [`score()`]: the Wilson score interval. Performs very well as long as `1 < x < n - 1`.
//! - [`score_adjusted()`]: the score interval with corrections for `x == 1` and `x == n - 1`.
//!   Works well for all `x` and `x / n`.
//!
//! ```
//! let (upper, lower): (f64, f64) = binomial_ci::score_adjusted(1, 100);
//!
//! assert_eq!(lower, 0.0512933 / 100.);
//! assert!(upper > 0.05 && upper < 0.06);
//! ```
//!
//! The functions trust their inputs: `n = 0` or `x > n` produce `NaN`s or meaningless bounds
//! rather than errors. Wrap inputs in [`Counts`] (or go through an [`Estimator`]) to have them
//! checked first.
//!
//! For the background, see "Approximate is Better than Exact for Interval Estimation of Binomial
//! Proportions" by Agresti and Coull.

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod counts;
mod error;
mod estimate;
mod float;
mod method;
mod score;
mod wald;

pub use crate::counts::Counts;
pub use crate::error::{Error, Result};
pub use crate::estimate::{ConfidenceInterval, Estimate, Estimator};
pub use crate::float::Float;
pub use crate::method::Method;
pub use crate::score::{score, score_adjusted};
pub use crate::wald::{wald, wald_adjusted};

/// Two-sided standard-normal quantile used by every method (95% confidence)
pub const Z: f64 = <f64 as Float>::Z;
