//! Configuration error types.
//!
//! Every variant is recoverable: the caller can retry with corrected input
//! and the timer engine is never touched by a rejected configuration.

use thiserror::Error;

/// Errors returned when validating a cycle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The work or break duration was zero or negative.
    #[error("durations must be positive (work: {work_seconds}s, break: {break_seconds}s)")]
    NonPositiveDuration {
        /// Requested work duration in seconds
        work_seconds: i64,
        /// Requested break duration in seconds
        break_seconds: i64,
    },

    /// The near-end threshold was negative or not shorter than both phases.
    #[error("alert threshold must be between 0 and {limit_seconds}s exclusive, got {threshold_seconds}s")]
    ThresholdOutOfRange {
        /// Requested threshold in seconds
        threshold_seconds: i64,
        /// The shorter of the two phase durations
        limit_seconds: i64,
    },

    /// A duration does not fit in the engine's counter.
    #[error("duration of {seconds}s is too large (max {max}s)", max = u32::MAX)]
    DurationTooLarge {
        /// Requested duration in seconds
        seconds: i64,
    },
}

impl ConfigError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NonPositiveDuration { .. } => "use at least one second for work and break",
            Self::ThresholdOutOfRange { .. } => {
                "pick an alert shorter than both phases, or 0 to disable it"
            }
            Self::DurationTooLarge { .. } => "use a shorter duration",
        }
    }
}
