//! Validated `(successes, trials)` pairs

use std::convert::TryFrom;

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::float::Float;

/// The outcome of `trials` independent trials, `successes` of which succeeded
///
/// Invariants:
///
/// - `trials > 0`
/// - `successes <= trials`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCounts")]
pub struct Counts {
    successes: usize,
    trials: usize,
}

impl Counts {
    /// Checks and wraps `successes` out of `trials`
    pub fn new(successes: usize, trials: usize) -> Result<Counts> {
        let err = if trials == 0 {
            Error::NoTrials
        } else if successes > trials {
            Error::TooManySuccesses { successes, trials }
        } else {
            return Ok(Counts { successes, trials });
        };

        debug!("rejected counts: {}", err);
        Err(err)
    }

    /// Number of successful trials
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Number of trials
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Number of failed trials
    pub fn failures(&self) -> usize {
        self.trials - self.successes
    }

    /// Returns the observed success rate, `successes / trials`
    pub fn proportion<A>(&self) -> A
    where
        A: Float,
    {
        A::cast(self.successes) / A::cast(self.trials)
    }
}

#[derive(Deserialize)]
struct RawCounts {
    successes: usize,
    trials: usize,
}

impl TryFrom<RawCounts> for Counts {
    type Error = Error;

    fn try_from(raw: RawCounts) -> Result<Counts> {
        Counts::new(raw.successes, raw.trials)
    }
}
