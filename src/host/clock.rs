//! One-second clock source.
//!
//! Drives [`TimerService::tick`] on a fixed period with
//! `tokio::time::interval`. The clock ticks unconditionally; the engine
//! ignores ticks while idle or paused. Late ticks are skipped rather than
//! bunched up, so remaining time reflects ticks actually delivered.

use tokio::sync::watch;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use super::service::TimerService;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    period: Duration,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Clock {
    /// Creates a clock ticking every `period`.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Ticks the service until `shutdown` turns true or its sender is dropped.
    ///
    /// The first tick happens one period after the call. Returns the number
    /// of ticks delivered.
    pub async fn run(self, service: TimerService, mut shutdown: watch::Receiver<bool>) -> u64 {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut delivered = 0u64;

        tracing::debug!(period_ms = self.period.as_millis() as u64, "clock started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    service.tick().await;
                    delivered += 1;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        tracing::debug!(delivered, "clock stopped");
        delivered
    }
}
