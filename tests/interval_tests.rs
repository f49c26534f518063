use approx::assert_relative_eq;
use binomial_ci::{
    score, score_adjusted, wald, wald_adjusted, Counts, Error, Estimate, Estimator, Method, Z,
};
use serde_json::json;

/*
 * Worked examples at the 95% level. Expected values come from evaluating the
 * formulas by hand in double precision.
 */

#[test]
fn wald_midpoint() {
    let (upper, lower): (f64, f64) = wald(50, 100);

    assert_relative_eq!(upper, 0.598, epsilon = 1e-12);
    assert_relative_eq!(lower, 0.402, epsilon = 1e-12);
}

#[test]
fn wald_is_clamped_at_zero() {
    let (upper, lower): (f64, f64) = wald(0, 10);

    assert_eq!(upper, 0.0);
    assert_eq!(lower, 0.0);
    assert!(lower.is_sign_positive());
}

#[test]
fn wald_adjusted_shifts_inputs() {
    let adjusted: (f64, f64) = wald_adjusted(0, 10);

    assert_eq!(adjusted, wald(2, 14));
    assert_relative_eq!(adjusted.0, 0.326_160_170_655_376_45, epsilon = 1e-12);
    assert_eq!(adjusted.1, 0.0);
}

#[test]
fn score_midpoint() {
    let (upper, lower): (f64, f64) = score(50, 100);

    assert_relative_eq!(upper, 0.596_170_171_409_852_8, epsilon = 1e-12);
    assert_relative_eq!(lower, 0.403_829_828_590_147_16, epsilon = 1e-12);

    let (w_upper, w_lower): (f64, f64) = wald(50, 100);
    assert!(upper != w_upper && lower != w_lower);
}

#[test]
fn score_adjusted_near_the_edges() {
    let (_, raw_lower): (f64, f64) = score(1, 100);
    let (_, lower): (f64, f64) = score_adjusted(1, 100);

    assert_relative_eq!(raw_lower, 0.001_767_386_565_547_263_9, epsilon = 1e-12);
    assert_eq!(lower, 0.0512933 / 100.);
    assert_relative_eq!(lower, 0.000_512_933, epsilon = 1e-15);

    let (upper, _): (f64, f64) = score_adjusted(99, 100);
    assert_eq!(upper, 1. - 0.0512933 / 100.);
    assert_relative_eq!(upper, 0.999_487_067, epsilon = 1e-12);
}

#[test]
fn score_adjusted_both_overrides_for_two_trials() {
    let (raw_upper, raw_lower): (f64, f64) = score(1, 2);
    let (upper, lower): (f64, f64) = score_adjusted(1, 2);

    assert_relative_eq!(raw_upper, 0.905_471_345_199_134, epsilon = 1e-12);
    assert_relative_eq!(raw_lower, 0.094_528_654_800_866_11, epsilon = 1e-12);
    assert_eq!(upper, 0.974_353_35);
    assert_eq!(lower, 0.025_646_65);
}

#[test]
fn every_method_is_ordered_and_bounded() {
    for n in 1..=200 {
        for x in 0..=n {
            for &method in &Method::ALL {
                let (upper, lower): (f64, f64) = method.interval(x, n);

                assert!(lower <= upper, "{} {}/{}", method, x, n);
                assert!(lower > -1e-12 && upper < 1. + 1e-12, "{} {}/{}", method, x, n);
            }
        }
    }
}

#[test]
fn unchecked_inputs_propagate_as_nan() {
    for &method in &[Method::Wald, Method::Score, Method::ScoreAdjusted] {
        let (upper, lower): (f64, f64) = method.interval(0, 0);

        assert!(upper.is_nan() && lower.is_nan(), "{}", method);
    }

    let (_, lower): (f64, f64) = score_adjusted(1, 0);
    assert!(lower.is_infinite());
}

#[test]
fn checked_inputs() {
    assert_eq!(Counts::new(3, 0), Err(Error::NoTrials));
    assert_eq!(
        Counts::new(4, 3).unwrap_err().to_string(),
        "4 successes out of 3 trials"
    );
    assert_eq!(
        Estimator::default().estimate_counts::<f64>(0, 0),
        Err(Error::NoTrials)
    );
}

#[test]
fn estimate_serializes_with_the_method_name() {
    let estimate: Estimate<f64> = Estimator::default()
        .method(Method::Wald)
        .estimate(Counts::new(0, 10).unwrap());

    assert_eq!(
        serde_json::to_value(&estimate).unwrap(),
        json!({
            "method": "wald",
            "point_estimate": 0.0,
            "standard_error": 0.0,
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": 0.0,
                "upper_bound": 0.0,
            },
        })
    );
}

#[test]
fn z_constant() {
    assert_eq!(Z, 1.96);
}
