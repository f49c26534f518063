//! Float trait

use cast::From;
use num_traits::float;

/// This is an extension of `num_traits::float::Float` that adds safe
/// casting from counts, Sync + Send, and the constants shared by every
/// interval method, spelled out in each width so that `f64` results are
/// not rounded through an `f32` literal.
pub trait Float: float::Float + From<usize, Output = Self> + Sync + Send {
    /// Two-sided standard-normal quantile for the confidence level
    const Z: Self;

    /// Confidence level that `Z` corresponds to
    const CONFIDENCE_LEVEL: Self;

    /// Agresti-Coull bound for the score interval at `x == 1` and `x == n - 1`
    const SCORE_ADJUSTMENT: Self;
}

impl Float for f32 {
    const Z: f32 = 1.96;
    const CONFIDENCE_LEVEL: f32 = 0.95;
    const SCORE_ADJUSTMENT: f32 = 0.051_293_3;
}

impl Float for f64 {
    const Z: f64 = 1.96;
    const CONFIDENCE_LEVEL: f64 = 0.95;
    const SCORE_ADJUSTMENT: f64 = 0.051_293_3;
}
