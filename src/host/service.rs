//! Shared, lock-guarded access to the timer engine.
//!
//! The clock task and the command task both drive the same engine. The
//! service keeps it behind a single `tokio::sync::Mutex` so that a tick never
//! overlaps a control operation, and forwards every event the engine emits
//! to the notification dispatcher.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::engine::{TimerEngine, TimerEvent};
use crate::types::{ConfigError, CycleConfig, RunState, TimerSnapshot};

/// Cloneable handle to a timer engine.
#[derive(Clone)]
pub struct TimerService {
    engine: Arc<Mutex<TimerEngine>>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerService {
    /// Wraps an engine and returns the receiving end of its event stream.
    pub fn new(engine: TimerEngine) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let service = Self {
            engine: Arc::new(Mutex::new(engine)),
            event_tx,
        };
        (service, event_rx)
    }

    /// Starts a fresh cycle with the stored configuration.
    ///
    /// A configuration deferred while running or paused is used if present.
    pub async fn start(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let config = engine
            .pending_config()
            .copied()
            .unwrap_or(*engine.config());
        let snapshot = engine.start(config);
        self.forward(engine.drain_events());
        snapshot
    }

    /// Starts a fresh cycle with the given configuration.
    pub async fn start_with(&self, config: CycleConfig) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let snapshot = engine.start(config);
        self.forward(engine.drain_events());
        snapshot
    }

    /// Pauses the countdown.
    pub async fn pause(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let snapshot = engine.pause();
        self.forward(engine.drain_events());
        snapshot
    }

    /// Resumes the countdown.
    pub async fn resume(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let snapshot = engine.resume();
        self.forward(engine.drain_events());
        snapshot
    }

    /// Pauses when running, resumes when paused, does nothing when idle.
    pub async fn toggle(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let snapshot = match engine.snapshot().state {
            RunState::Running => engine.pause(),
            RunState::Paused => engine.resume(),
            RunState::Idle => engine.snapshot(),
        };
        self.forward(engine.drain_events());
        snapshot
    }

    /// Returns the engine to idle.
    pub async fn reset(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let snapshot = engine.reset();
        self.forward(engine.drain_events());
        snapshot
    }

    /// Validates and applies new durations under the current policy.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the engine is left untouched.
    pub async fn reconfigure(
        &self,
        work_seconds: i64,
        break_seconds: i64,
        alert_threshold_seconds: i64,
    ) -> Result<TimerSnapshot, ConfigError> {
        let mut engine = self.engine.lock().await;
        engine.reconfigure_with(work_seconds, break_seconds, alert_threshold_seconds)
    }

    /// Applies an already validated configuration.
    pub async fn apply_config(&self, config: CycleConfig) -> TimerSnapshot {
        self.engine.lock().await.reconfigure(config)
    }

    /// Advances the countdown by one second and forwards its events.
    pub async fn tick(&self) -> TimerSnapshot {
        let mut engine = self.engine.lock().await;
        let (snapshot, events) = engine.tick();
        self.forward(events);
        snapshot
    }

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> TimerSnapshot {
        self.engine.lock().await.snapshot()
    }

    /// Returns the configuration in effect for the current phase.
    pub async fn config(&self) -> CycleConfig {
        *self.engine.lock().await.config()
    }

    /// Returns the configuration the next phase will use: the pending one
    /// if a change is waiting, else the active one.
    pub async fn effective_config(&self) -> CycleConfig {
        let engine = self.engine.lock().await;
        engine.pending_config().copied().unwrap_or(*engine.config())
    }

    fn forward(&self, events: Vec<TimerEvent>) {
        for event in events {
            if self.event_tx.send(event).is_err() {
                tracing::debug!(?event, "event dropped, dispatcher is gone");
            }
        }
    }
}
