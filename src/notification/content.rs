//! Notification content construction.
//!
//! Turns engine events into the title/body pairs a notifier shows. The text
//! is the same for every delivery mechanism.

use serde::Serialize;
use uuid::Uuid;

use crate::engine::TimerEvent;
use crate::types::Phase;

/// Title shown on every notification.
pub const NOTIFICATION_TITLE: &str = "Interval Timer";

/// A notification ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContent {
    /// Unique id for this notification
    pub id: Uuid,
    /// Title line
    pub title: String,
    /// Body text
    pub body: String,
    /// Whether the notification should be shown right away rather than
    /// batched by the delivery mechanism
    pub immediate: bool,
}

impl NotificationContent {
    /// Creates content with a fresh id and the default title.
    #[must_use]
    pub fn new(body: impl Into<String>, immediate: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: NOTIFICATION_TITLE.to_string(),
            body: body.into(),
            immediate,
        }
    }

    /// Builds the notification for an engine event.
    #[must_use]
    pub fn for_event(event: &TimerEvent) -> Self {
        match *event {
            TimerEvent::PhaseStarted {
                phase,
                duration_seconds,
            } => Self::new(
                format!(
                    "{} started for {}",
                    phase.label(),
                    format_duration(duration_seconds)
                ),
                true,
            ),
            TimerEvent::NearEnd {
                phase,
                remaining_seconds,
            } => Self::new(
                format!("{} ending in {} seconds!", phase.label(), remaining_seconds),
                false,
            ),
            TimerEvent::PhaseEnded { phase: Phase::Work } => {
                Self::new("Work done! Time for break.", true)
            }
            TimerEvent::PhaseEnded {
                phase: Phase::Break,
            } => Self::new("Break over! Time to work.", true),
            TimerEvent::Paused => Self::new("Timer paused", true),
            TimerEvent::Resumed => Self::new("Timer resumed", true),
            TimerEvent::Reset => Self::new("Timer reset", true),
        }
    }
}

/// Formats a duration as `{m}m {s}s`.
fn format_duration(total_seconds: u32) -> String {
    format!("{}m {}s", total_seconds / 60, total_seconds % 60)
}
