//! Timer engine for the interval timer.
//!
//! This module provides the core state machine:
//! - State transitions (Idle → Running ⇄ Paused → Idle)
//! - One-second countdown driven by the host calling `tick()`
//! - Automatic Work ⇄ Break switching
//! - Near-end alert, fired once per phase
//! - Immediate or deferred reconfiguration
//!
//! The engine owns no clock and performs no I/O. Every operation is a total
//! function over the current state; calls that make no sense in the current
//! state (pausing while idle, resuming while running) are no-ops.

use serde::{Deserialize, Serialize};

use crate::types::{ConfigError, CycleConfig, Phase, RunState, TimerSnapshot};

// ============================================================================
// TimerEvent
// ============================================================================

/// Domain events produced by the engine for the notification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// A phase began counting down
    PhaseStarted {
        /// The phase that started
        phase: Phase,
        /// Its full duration in seconds
        duration_seconds: u32,
    },
    /// Remaining time reached the alert threshold
    NearEnd {
        /// The phase that is about to end
        phase: Phase,
        /// Seconds left when the alert fired
        remaining_seconds: u32,
    },
    /// A phase counted down to zero
    PhaseEnded {
        /// The phase that ended
        phase: Phase,
    },
    /// Countdown suspended
    Paused,
    /// Countdown continued
    Resumed,
    /// Timer returned to idle
    Reset,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Work/break countdown state machine.
///
/// Control operations (`start`, `pause`, `resume`, `reset`) queue the event
/// they emit; the host collects them with [`TimerEngine::drain_events`].
/// [`TimerEngine::tick`] returns its events directly.
///
/// # Example
///
/// ```
/// use cycle_timer::engine::{TimerEngine, TimerEvent};
/// use cycle_timer::types::{CycleConfig, Phase};
///
/// let config = CycleConfig::configure(3, 2, 0).unwrap();
/// let mut engine = TimerEngine::new(config);
/// engine.start(config);
/// engine.drain_events();
///
/// engine.tick();
/// engine.tick();
/// let (snapshot, events) = engine.tick();
/// assert_eq!(snapshot.phase, Phase::Break);
/// assert_eq!(events[0], TimerEvent::PhaseEnded { phase: Phase::Work });
/// ```
#[derive(Debug, Clone)]
pub struct TimerEngine {
    /// Configuration in effect for the current phase
    config: CycleConfig,
    /// Configuration waiting for the next phase switch
    pending: Option<CycleConfig>,
    /// Externally observable state
    snapshot: TimerSnapshot,
    /// Whether the near-end alert already fired in this phase
    alert_fired: bool,
    /// Events queued by control operations
    outbox: Vec<TimerEvent>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(CycleConfig::default())
    }
}

impl TimerEngine {
    /// Creates an idle engine with the given configuration.
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            pending: None,
            snapshot: TimerSnapshot::IDLE,
            alert_fired: false,
            outbox: Vec::new(),
        }
    }

    /// Starts a fresh cycle at the beginning of a work phase.
    ///
    /// Valid from any state. Any running or paused countdown is discarded,
    /// along with a configuration waiting for the next phase switch.
    pub fn start(&mut self, config: CycleConfig) -> TimerSnapshot {
        self.config = config;
        self.pending = None;
        self.alert_fired = false;
        self.snapshot = TimerSnapshot {
            phase: Phase::Work,
            state: RunState::Running,
            remaining_seconds: config.work_seconds(),
        };

        tracing::debug!(
            work_seconds = config.work_seconds(),
            break_seconds = config.break_seconds(),
            "cycle started"
        );
        self.outbox.push(TimerEvent::PhaseStarted {
            phase: Phase::Work,
            duration_seconds: config.work_seconds(),
        });

        self.snapshot
    }

    /// Suspends the countdown. No-op unless running.
    pub fn pause(&mut self) -> TimerSnapshot {
        if self.snapshot.state != RunState::Running {
            return self.snapshot;
        }

        self.snapshot.state = RunState::Paused;
        tracing::debug!(remaining = self.snapshot.remaining_seconds, "paused");
        self.outbox.push(TimerEvent::Paused);

        self.snapshot
    }

    /// Continues a paused countdown. No-op unless paused.
    pub fn resume(&mut self) -> TimerSnapshot {
        if self.snapshot.state != RunState::Paused {
            return self.snapshot;
        }

        self.snapshot.state = RunState::Running;
        tracing::debug!(remaining = self.snapshot.remaining_seconds, "resumed");
        self.outbox.push(TimerEvent::Resumed);

        self.snapshot
    }

    /// Returns to idle at the work phase. Valid from any state.
    ///
    /// The stored configuration is kept for the next `start`; a deferred
    /// configuration becomes the stored one.
    pub fn reset(&mut self) -> TimerSnapshot {
        if let Some(pending) = self.pending.take() {
            self.config = pending;
        }
        self.alert_fired = false;
        self.snapshot = TimerSnapshot::IDLE;

        tracing::debug!("reset");
        self.outbox.push(TimerEvent::Reset);

        self.snapshot
    }

    /// Replaces the stored durations.
    ///
    /// While running with `apply_immediately`, the current phase restarts at
    /// its new duration without changing phase or state. While running
    /// without it, or while paused, the configuration waits for the next
    /// phase switch. While idle it simply replaces the stored configuration.
    pub fn reconfigure(&mut self, config: CycleConfig) -> TimerSnapshot {
        match self.snapshot.state {
            RunState::Running if config.apply_immediately() => {
                self.config = config;
                self.pending = None;
                self.alert_fired = false;
                self.snapshot.remaining_seconds = config.duration_for(self.snapshot.phase);
                tracing::debug!(
                    phase = %self.snapshot.phase,
                    remaining = self.snapshot.remaining_seconds,
                    "reconfigured, applied immediately"
                );
            }
            RunState::Running | RunState::Paused => {
                self.pending = Some(config);
                tracing::debug!("reconfigured, deferred to next phase switch");
            }
            RunState::Idle => {
                self.config = config;
                self.pending = None;
                tracing::debug!("reconfigured while idle");
            }
        }

        self.snapshot
    }

    /// Validates raw durations and reconfigures, keeping the current
    /// reconfiguration policy.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the engine untouched.
    pub fn reconfigure_with(
        &mut self,
        work_seconds: i64,
        break_seconds: i64,
        alert_threshold_seconds: i64,
    ) -> Result<TimerSnapshot, ConfigError> {
        let config = CycleConfig::configure(work_seconds, break_seconds, alert_threshold_seconds)?
            .with_apply_immediately(self.config.apply_immediately());
        Ok(self.reconfigure(config))
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing unless running. Otherwise returns the updated snapshot
    /// with zero, one or two events: `NearEnd` when the threshold is reached,
    /// or `PhaseEnded` followed by `PhaseStarted` when the phase runs out.
    pub fn tick(&mut self) -> (TimerSnapshot, Vec<TimerEvent>) {
        if self.snapshot.state != RunState::Running {
            return (self.snapshot, Vec::new());
        }

        let mut events = Vec::with_capacity(2);
        let remaining = self.snapshot.remaining_seconds.saturating_sub(1);
        self.snapshot.remaining_seconds = remaining;

        if self.config.alert_enabled()
            && !self.alert_fired
            && remaining == self.config.alert_threshold_seconds()
        {
            self.alert_fired = true;
            tracing::debug!(phase = %self.snapshot.phase, remaining, "near end");
            events.push(TimerEvent::NearEnd {
                phase: self.snapshot.phase,
                remaining_seconds: remaining,
            });
        }

        if remaining == 0 {
            self.switch_phase(&mut events);
        }

        (self.snapshot, events)
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshot
    }

    /// Returns the configuration in effect for the current phase.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Returns the configuration waiting for the next phase switch, if any.
    pub fn pending_config(&self) -> Option<&CycleConfig> {
        self.pending.as_ref()
    }

    /// Takes the events queued by control operations, oldest first.
    pub fn drain_events(&mut self) -> Vec<TimerEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn switch_phase(&mut self, events: &mut Vec<TimerEvent>) {
        if let Some(pending) = self.pending.take() {
            self.config = pending;
        }

        let ended = self.snapshot.phase;
        let next = ended.other();
        let duration = self.config.duration_for(next);

        self.snapshot.phase = next;
        self.snapshot.remaining_seconds = duration;
        self.alert_fired = false;

        tracing::debug!(from = %ended, to = %next, duration, "phase switched");
        events.push(TimerEvent::PhaseEnded { phase: ended });
        events.push(TimerEvent::PhaseStarted {
            phase: next,
            duration_seconds: duration,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
