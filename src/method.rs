use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::float::Float;
use crate::score::{score, score_adjusted};
use crate::wald::{wald, wald_adjusted};

/// Method used to compute a binomial proportion confidence interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Normal approximation around the observed proportion, see [`wald`]
    Wald,
    /// Wald interval after adding two successes and two failures, see [`wald_adjusted`]
    WaldAdjusted,
    /// Wilson score interval, see [`score`]
    Score,
    /// Score interval with the `x == 1` / `x == n - 1` corrections, see [`score_adjusted`]
    ScoreAdjusted,
}

impl Method {
    /// Every method, in declaration order
    pub const ALL: [Method; 4] = [
        Method::Wald,
        Method::WaldAdjusted,
        Method::Score,
        Method::ScoreAdjusted,
    ];

    /// Returns the `(upper, lower)` bounds for `x` successes out of `n` trials
    pub fn interval<A>(self, x: usize, n: usize) -> (A, A)
    where
        A: Float,
    {
        match self {
            Method::Wald => wald(x, n),
            Method::WaldAdjusted => wald_adjusted(x, n),
            Method::Score => score(x, n),
            Method::ScoreAdjusted => score_adjusted(x, n),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Method::Wald => "wald",
            Method::WaldAdjusted => "wald-adjusted",
            Method::Score => "score",
            Method::ScoreAdjusted => "score-adjusted",
        }
    }
}

impl Default for Method {
    fn default() -> Method {
        Method::ScoreAdjusted
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Method, Error> {
        match s.to_ascii_lowercase().as_str() {
            "wald" => Ok(Method::Wald),
            "wald-adjusted" | "agresti-coull" => Ok(Method::WaldAdjusted),
            "score" | "wilson" => Ok(Method::Score),
            "score-adjusted" => Ok(Method::ScoreAdjusted),
            _ => Err(Error::UnknownMethod(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Method;
    use crate::error::Error;
    use crate::{score, score_adjusted, wald, wald_adjusted};

    #[test]
    fn dispatch() {
        let (x, n) = (3, 17);

        assert_eq!(Method::Wald.interval::<f64>(x, n), wald(x, n));
        assert_eq!(Method::WaldAdjusted.interval::<f64>(x, n), wald_adjusted(x, n));
        assert_eq!(Method::Score.interval::<f64>(x, n), score(x, n));
        assert_eq!(Method::ScoreAdjusted.interval::<f64>(x, n), score_adjusted(x, n));
    }

    #[test]
    fn names() {
        for &method in &Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }

        assert_eq!("Wilson".parse::<Method>(), Ok(Method::Score));
        assert_eq!("agresti-coull".parse::<Method>(), Ok(Method::WaldAdjusted));
        assert_eq!(
            "clopper-pearson".parse::<Method>(),
            Err(Error::UnknownMethod("clopper-pearson".to_owned()))
        );
    }

    #[test]
    fn serde_names_match_display() {
        for &method in &Method::ALL {
            let json = serde_json::to_string(&method).unwrap();

            assert_eq!(json, format!("\"{}\"", method));
        }
    }
}
