//! Notification dispatch.
//!
//! Consumes the event stream of a [`TimerService`](super::TimerService) and
//! hands each event to a [`NotificationPort`], after checking the
//! [`PermissionPort`]. Runs concurrently with the clock, so a slow notifier
//! delays only other notifications, never the countdown. Failures are logged
//! and dropped.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::engine::TimerEvent;
use crate::notification::{NotificationPort, PermissionPort};

/// What happened to a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The notifier accepted the event
    Delivered,
    /// Notifications are disabled by permission
    Suppressed,
    /// The notifier reported itself unavailable
    Unavailable,
    /// The notifier returned an error
    Failed,
}

/// Totals for one dispatcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub delivered: u64,
    pub suppressed: u64,
    pub unavailable: u64,
    pub failed: u64,
}

impl DispatchStats {
    fn record(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Delivered => self.delivered += 1,
            Delivery::Suppressed => self.suppressed += 1,
            Delivery::Unavailable => self.unavailable += 1,
            Delivery::Failed => self.failed += 1,
        }
    }

    /// Total number of events seen.
    pub fn total(&self) -> u64 {
        self.delivered + self.suppressed + self.unavailable + self.failed
    }
}

/// Forwards engine events to a notifier.
pub struct Dispatcher<N, P> {
    notifier: Arc<N>,
    permission: Arc<P>,
    events: mpsc::UnboundedReceiver<TimerEvent>,
}

impl<N, P> Dispatcher<N, P>
where
    N: NotificationPort,
    P: PermissionPort,
{
    pub fn new(
        notifier: Arc<N>,
        permission: Arc<P>,
        events: mpsc::UnboundedReceiver<TimerEvent>,
    ) -> Self {
        Self {
            notifier,
            permission,
            events,
        }
    }

    /// Dispatches events until every sender is gone.
    pub async fn run(mut self) -> DispatchStats {
        let mut stats = DispatchStats::default();
        while let Some(event) = self.events.recv().await {
            stats.record(self.dispatch(&event).await);
        }
        tracing::debug!(?stats, "dispatcher finished");
        stats
    }

    /// Delivers one event.
    pub async fn dispatch(&self, event: &TimerEvent) -> Delivery {
        if !self.permission.notifications_enabled() {
            tracing::trace!(?event, "notifications disabled");
            return Delivery::Suppressed;
        }
        if !self.notifier.is_available() {
            tracing::debug!(?event, "notifier unavailable");
            return Delivery::Unavailable;
        }

        match self.notifier.notify(event).await {
            Ok(()) => Delivery::Delivered,
            Err(e) => {
                tracing::warn!(?event, error = %e, "notification failed: {}", e.suggestion());
                Delivery::Failed
            }
        }
    }
}
