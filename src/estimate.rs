use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::counts::Counts;
use crate::error::Result;
use crate::float::Float;
use crate::method::Method;

/// Estimate interval of a population proportion
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval<A> {
    /// The confidence level used to find the confidence interval
    pub confidence_level: A,
    /// The lower bound of the confidence interval
    pub lower_bound: A,
    /// The upper bound of the confidence interval
    pub upper_bound: A,
}

impl<A> ConfidenceInterval<A>
where
    A: Float,
{
    /// Wraps the `(upper, lower)` pair returned by the interval functions
    pub fn from_bounds((upper, lower): (A, A)) -> ConfidenceInterval<A> {
        ConfidenceInterval {
            confidence_level: A::CONFIDENCE_LEVEL,
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    /// Returns `upper_bound - lower_bound`
    pub fn width(&self) -> A {
        self.upper_bound - self.lower_bound
    }

    /// Checks whether `p` lies within the closed interval
    pub fn contains(&self, p: A) -> bool {
        self.lower_bound <= p && p <= self.upper_bound
    }
}

/// A point estimate of a proportion together with its confidence interval
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate<A> {
    /// Method the confidence interval was computed with
    pub method: Method,
    /// The observed proportion, `successes / trials`
    pub point_estimate: A,
    /// The normal-approximation standard error of the point estimate
    pub standard_error: A,
    /// The confidence interval
    pub confidence_interval: ConfidenceInterval<A>,
}

/// Computes [`Estimate`]s with a configured interval method
///
/// ```
/// use binomial_ci::{Counts, Estimator, Method};
///
/// let estimator = Estimator::default().method(Method::Wald);
/// let estimate = estimator.estimate::<f64>(Counts::new(50, 100).unwrap());
///
/// assert_eq!(estimate.point_estimate, 0.5);
/// assert!(estimate.confidence_interval.contains(0.55));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimator {
    #[serde(default)]
    method: Method,
}

impl Estimator {
    /// Changes the interval method (`ScoreAdjusted` by default)
    pub fn method(mut self, method: Method) -> Estimator {
        self.method = method;
        self
    }

    /// Returns the configured interval method
    pub fn current_method(&self) -> Method {
        self.method
    }

    /// Estimates the proportion behind `counts`
    pub fn estimate<A>(&self, counts: Counts) -> Estimate<A>
    where
        A: Float,
    {
        let (x, n) = (counts.successes(), counts.trials());
        let p_hat = counts.proportion::<A>();
        let standard_error = (p_hat * (A::cast(1) - p_hat) / A::cast(n)).sqrt();
        let confidence_interval: ConfidenceInterval<A> =
            ConfidenceInterval::from_bounds(self.method.interval(x, n));

        debug!(
            "{} interval for {}/{}: [{}, {}]",
            self.method,
            x,
            n,
            confidence_interval.lower_bound.to_f64().unwrap_or(f64::NAN),
            confidence_interval.upper_bound.to_f64().unwrap_or(f64::NAN),
        );

        Estimate {
            method: self.method,
            point_estimate: p_hat,
            standard_error,
            confidence_interval,
        }
    }

    /// Validates `successes` out of `trials`, then estimates the proportion
    pub fn estimate_counts<A>(&self, successes: usize, trials: usize) -> Result<Estimate<A>>
    where
        A: Float,
    {
        Ok(self.estimate(Counts::new(successes, trials)?))
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::estimate::{ConfidenceInterval, Estimator};
            use crate::method::Method;
            use crate::Counts;

            quickcheck! {
                fn contains_point_estimate(x: u16, n: u16) -> TestResult {
                    if let Some((x, n)) = crate::test::counts(x, n) {
                        let counts = Counts::new(x, n).unwrap();

                        let ok = [Method::Wald, Method::Score].iter().all(|&method| {
                            let estimate = Estimator::default()
                                .method(method)
                                .estimate::<$ty>(counts);
                            let ci = estimate.confidence_interval;

                            ci.lower_bound <= estimate.point_estimate + 1e-5
                                && estimate.point_estimate <= ci.upper_bound + 1e-5
                        });

                        TestResult::from_bool(ok)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn from_bounds_keeps_positions() {
                let ci = ConfidenceInterval::<$ty>::from_bounds((0.75, 0.25));

                assert_eq!(ci.upper_bound, 0.75);
                assert_eq!(ci.lower_bound, 0.25);
                assert_eq!(ci.width(), 0.5);
                assert!(ci.contains(0.25) && ci.contains(0.75));
                assert!(!ci.contains(0.2));
                assert!(relative_eq!(ci.confidence_level, 0.95));
            }

            #[test]
            fn estimate() {
                let estimate = Estimator::default()
                    .method(Method::Wald)
                    .estimate::<$ty>(Counts::new(50, 100).unwrap());

                assert_eq!(estimate.method, Method::Wald);
                assert_eq!(estimate.point_estimate, 0.5);
                assert!(relative_eq!(estimate.standard_error, 0.05, epsilon = 1e-6));
                assert!(relative_eq!(
                    estimate.confidence_interval.width(),
                    2. * 1.96 * 0.05,
                    epsilon = 1e-5
                ));
            }

            #[test]
            fn estimate_counts_validates() {
                let estimator = Estimator::default();

                assert!(estimator.estimate_counts::<$ty>(0, 0).is_err());
                assert!(estimator.estimate_counts::<$ty>(5, 4).is_err());

                let estimate = estimator.estimate_counts::<$ty>(1, 100).unwrap();
                assert_eq!(estimate.method, Method::ScoreAdjusted);
                assert_eq!(estimate.confidence_interval.lower_bound, 0.051_293_3 / 100.);
            }
        }
    };
}
