//! Score (Wilson) intervals

use log::trace;

use crate::float::Float;

/// Returns the `(upper, lower)` bounds of the 95% score ("Wilson") interval for `x` successes out
/// of `n` trials
///
/// This inverts the normal approximation to the binomial test and performs very well as long as
/// `1 < x < n - 1`. See [`score_adjusted`] for a version that also behaves near those bounds.
///
/// The bounds are not clamped; at `x = 0` and `x = n` they may miss `[0, 1]` by a rounding
/// error.
pub fn score<A>(x: usize, n: usize) -> (A, A)
where
    A: Float,
{
    let _1 = A::cast(1);
    let _2 = A::cast(2);
    let _4 = A::cast(4);
    let z = A::Z;
    let n = A::cast(n);

    let p_hat = A::cast(x) / n;
    let delta = z * ((p_hat * (_1 - p_hat) + z * z / (_4 * n)) / n).sqrt();
    let center = p_hat + (z * z) / (_2 * n);
    let denom = _1 + z * z / n;

    ((center + delta) / denom, (center - delta) / denom)
}

/// Like [`score`] but applies the Agresti-Coull corrections for `x == 1` and `x == n - 1`
///
/// This method should work well for all values of `x` and `x / n`. When `n == 2` and `x == 1`
/// both corrections apply.
pub fn score_adjusted<A>(x: usize, n: usize) -> (A, A)
where
    A: Float,
{
    let (mut upper, mut lower) = score::<A>(x, n);
    let nf = A::cast(n);

    if x == 1 {
        lower = A::SCORE_ADJUSTMENT / nf;
        trace!("score_adjusted({}, {}): lower bound overridden", x, n);
    }

    // NB `checked_sub` so that `n = 0` still falls through to the floating point artifacts
    if n.checked_sub(1) == Some(x) {
        upper = A::cast(1) - A::SCORE_ADJUSTMENT / nf;
        trace!("score_adjusted({}, {}): upper bound overridden", x, n);
    }

    (upper, lower)
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::score::{score, score_adjusted};

            const TOL: $ty = 1e-5;

            quickcheck! {
                fn ordered(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let (upper, lower): ($ty, $ty) = score(x, n);

                        TestResult::from_bool(lower <= upper)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn within_unit_interval(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let (upper, lower): ($ty, $ty) = score(x, n);

                        TestResult::from_bool(lower >= -TOL && upper <= 1. + TOL)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn adjusted_only_touches_the_edges(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let (upper, lower): ($ty, $ty) = score(x, n);
                        let (adj_upper, adj_lower): ($ty, $ty) = score_adjusted(x, n);

                        let lower_ok = if x == 1 {
                            adj_lower == 0.051_293_3 / n as $ty
                        } else {
                            adj_lower == lower
                        };
                        let upper_ok = if x + 1 == n {
                            adj_upper == 1. - 0.051_293_3 / n as $ty
                        } else {
                            adj_upper == upper
                        };

                        TestResult::from_bool(lower_ok && upper_ok)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn midpoint() {
                let (upper, lower): ($ty, $ty) = score(50, 100);

                assert!(relative_eq!(upper, 0.596_170_17, epsilon = 1e-6));
                assert!(relative_eq!(lower, 0.403_829_83, epsilon = 1e-6));
            }

            #[test]
            fn narrower_than_wald_at_the_midpoint() {
                let (upper, lower): ($ty, $ty) = score(50, 100);
                let (w_upper, w_lower): ($ty, $ty) = crate::wald::wald(50, 100);

                assert!(upper < w_upper);
                assert!(lower > w_lower);
            }

            #[test]
            fn extremes() {
                for &n in &[1, 2, 3, 5, 10, 20, 100, 1000] {
                    let (upper, lower): ($ty, $ty) = score(0, n);
                    assert!(lower.abs() < TOL);
                    assert!(upper > 0. && upper < 1.);

                    let (upper, lower): ($ty, $ty) = score(n, n);
                    assert!((upper - 1.).abs() < TOL);
                    assert!(lower > 0. && lower < 1.);
                }
            }

            #[test]
            fn no_trials() {
                let (upper, lower): ($ty, $ty) = score(0, 0);

                assert!(upper.is_nan());
                assert!(lower.is_nan());

                let (upper, lower): ($ty, $ty) = score_adjusted(0, 0);

                assert!(upper.is_nan());
                assert!(lower.is_nan());
            }

            #[test]
            fn adjusted_single_success() {
                let (_, lower): ($ty, $ty) = score(1, 100);
                let (adj_upper, adj_lower): ($ty, $ty) = score_adjusted(1, 100);

                assert_eq!(adj_lower, 0.051_293_3 / 100.);
                assert!(relative_eq!(adj_lower, 0.000_512_933, epsilon = 1e-9));
                assert!(adj_lower != lower);
                assert_eq!(adj_upper, score::<$ty>(1, 100).0);
            }

            #[test]
            fn adjusted_single_failure() {
                let (upper, lower): ($ty, $ty) = score(99, 100);
                let (adj_upper, adj_lower): ($ty, $ty) = score_adjusted(99, 100);

                assert_eq!(adj_upper, 1. - 0.051_293_3 / 100.);
                assert!(relative_eq!(adj_upper, 0.999_487_067, epsilon = 1e-6));
                assert!(adj_upper != upper);
                assert_eq!(adj_lower, lower);
            }

            #[test]
            fn adjusted_two_trials_overrides_both() {
                let (adj_upper, adj_lower): ($ty, $ty) = score_adjusted(1, 2);

                assert_eq!(adj_lower, 0.051_293_3 / 2.);
                assert_eq!(adj_upper, 1. - 0.051_293_3 / 2.);
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);
}
