use thiserror::Error;

/// Errors reported by the validating layer (`Counts`, `Method::from_str`)
///
/// The interval functions themselves never fail; they trust their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of trials was zero
    #[error("at least one trial is required")]
    NoTrials,

    /// More successes than trials were reported
    #[error("{successes} successes out of {trials} trials")]
    TooManySuccesses {
        /// Reported successes
        successes: usize,
        /// Reported trials
        trials: usize,
    },

    /// The name does not match any interval method
    #[error("unknown interval method {0:?}")]
    UnknownMethod(String),
}

/// Result type for the validating layer
pub type Result<T> = ::std::result::Result<T, Error>;
