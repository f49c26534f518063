//! Wald intervals

use crate::float::Float;

/// Returns the `(upper, lower)` bounds of the 95% Wald interval for `x` successes out of `n`
/// trials
///
/// This is the plain normal approximation around `x / n`. It behaves poorly for small `n` and
/// for proportions near 0 or 1, and is mostly useful as a baseline for the other methods.
///
/// Both bounds are clamped to `[0, 1]`. Inputs are not validated: `n = 0` yields `NaN` bounds.
pub fn wald<A>(x: usize, n: usize) -> (A, A)
where
    A: Float,
{
    let _0 = A::cast(0);
    let _1 = A::cast(1);
    let n = A::cast(n);

    let p_hat = A::cast(x) / n;
    let delta = A::Z * (p_hat * (_1 - p_hat) / n).sqrt();

    // NB plain comparisons instead of `min`/`max`, which would swallow a `NaN`
    let mut upper = p_hat + delta;
    if upper > _1 {
        upper = _1;
    }

    let mut lower = p_hat - delta;
    if lower < _0 {
        lower = _0;
    }

    (upper, lower)
}

/// Returns the `(upper, lower)` bounds of the adjusted 95% Wald interval ("add two successes and
/// two failures")
///
/// For small `n` this is much more accurate than [`wald`], and when `x / n` is near 0 or 1 it
/// beats the score method as well. For general `n`, prefer [`score`](fn@crate::score).
///
/// See "Approximate is Better than Exact for Interval Estimation of Binomial Proportions" by
/// Agresti and Coull.
///
/// The pseudo-observations saturate at `usize::MAX` instead of overflowing.
pub fn wald_adjusted<A>(x: usize, n: usize) -> (A, A)
where
    A: Float,
{
    wald(x.saturating_add(2), n.saturating_add(4))
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::wald::{wald, wald_adjusted};

            quickcheck! {
                fn ordered(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let (upper, lower): ($ty, $ty) = wald(x, n);

                        TestResult::from_bool(lower <= upper)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn clamped(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let (upper, lower): ($ty, $ty) = wald(x, n);

                        TestResult::from_bool(lower >= 0. && upper <= 1.)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn adjusted_is_shifted_wald(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let adjusted: ($ty, $ty) = wald_adjusted(x, n);
                        let shifted: ($ty, $ty) = wald(x + 2, n + 4);

                        TestResult::from_bool(
                            adjusted.0.to_bits() == shifted.0.to_bits()
                                && adjusted.1.to_bits() == shifted.1.to_bits(),
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn midpoint() {
                let (upper, lower): ($ty, $ty) = wald(50, 100);

                assert!(relative_eq!(upper, 0.598, epsilon = 1e-6));
                assert!(relative_eq!(lower, 0.402, epsilon = 1e-6));
            }

            #[test]
            fn no_successes() {
                let (upper, lower): ($ty, $ty) = wald(0, 10);

                assert_eq!(upper, 0.);
                assert_eq!(lower, 0.);
            }

            #[test]
            fn all_successes() {
                let (upper, lower): ($ty, $ty) = wald(10, 10);

                assert_eq!(upper, 1.);
                assert_eq!(lower, 1.);
            }

            #[test]
            fn upper_is_clamped() {
                let (upper, lower): ($ty, $ty) = wald(9, 10);

                assert_eq!(upper, 1.);
                assert!(lower > 0. && lower < 0.9);
            }

            #[test]
            fn no_trials() {
                let (upper, lower): ($ty, $ty) = wald(0, 0);

                assert!(upper.is_nan());
                assert!(lower.is_nan());
            }

            #[test]
            fn adjusted_no_successes() {
                let (upper, lower): ($ty, $ty) = wald_adjusted(0, 10);

                // same as wald(2, 14): p = 1/7, the lower bound still needs the clamp
                assert!(relative_eq!(upper, 0.326_160_17, epsilon = 1e-6));
                assert!(upper > 1. / 7. && upper < 1.);
                assert_eq!(lower, 0.);
            }

            #[test]
            fn adjusted_no_trials() {
                let adjusted: ($ty, $ty) = wald_adjusted(0, 0);

                assert_eq!(adjusted, wald(2, 4));
                assert!(adjusted.0 < 1. && adjusted.1 > 0.);
            }

            #[test]
            fn adjusted_saturates_near_max() {
                let all: ($ty, $ty) = wald_adjusted(usize::MAX, usize::MAX);
                assert_eq!(all, wald(usize::MAX, usize::MAX));
                assert_eq!(all, (1., 1.));

                let none: ($ty, $ty) = wald_adjusted(0, usize::MAX - 1);
                assert_eq!(none, wald(2, usize::MAX));
                assert!(none.1 >= 0. && none.0 <= 1. && none.1 <= none.0);
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);
}
