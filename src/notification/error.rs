//! Notification error types.
//!
//! A notification failure is never fatal to timing: the dispatcher logs it
//! and moves on. These types only carry enough detail for that log line.

use thiserror::Error;

/// Errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery mechanism rejected or failed the notification.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// Writing the notification to its output failed.
    #[error("failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifyError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "check the notification channel",
            Self::Io(_) => "check that stdout is writable",
        }
    }
}
