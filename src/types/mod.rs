//! Core data types for the interval timer.
//!
//! This module defines the data structures used for:
//! - Phase and run state of the timer
//! - Cycle configuration with validation
//! - The externally observable timer snapshot
//! - `mm:ss` rendering of remaining time

pub mod error;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::error::ConfigError;

// ============================================================================
// Phase
// ============================================================================

/// The phase the timer is counting down. Work and Break alternate strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work session
    #[default]
    Work,
    /// Break between work sessions
    Break,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }

    /// Returns the phase that follows this one.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    /// Capitalized label used in notification text.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RunState
// ============================================================================

/// Whether the timer is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No active cycle; remaining time is zero
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Counting suspended, phase and remaining time retained
    Paused,
}

impl RunState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CycleConfig
// ============================================================================

/// Default work duration (25 minutes).
pub const DEFAULT_WORK_SECONDS: u32 = 25 * 60;

/// Default break duration (5 minutes).
pub const DEFAULT_BREAK_SECONDS: u32 = 5 * 60;

/// Default near-end alert threshold.
pub const DEFAULT_ALERT_THRESHOLD_SECONDS: u32 = 10;

/// Validated work/break cycle configuration.
///
/// Construct with [`CycleConfig::configure`] or [`CycleConfig::from_minutes`];
/// both reject non-positive durations and out-of-range thresholds instead of
/// clamping them.
///
/// # Example
///
/// ```
/// use cycle_timer::types::{CycleConfig, Phase};
///
/// let config = CycleConfig::configure(1500, 300, 10).unwrap();
/// assert_eq!(config.duration_for(Phase::Break), 300);
/// assert!(config.apply_immediately());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    work_seconds: u32,
    break_seconds: u32,
    alert_threshold_seconds: u32,
    apply_immediately: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            work_seconds: DEFAULT_WORK_SECONDS,
            break_seconds: DEFAULT_BREAK_SECONDS,
            alert_threshold_seconds: DEFAULT_ALERT_THRESHOLD_SECONDS,
            apply_immediately: true,
        }
    }
}

impl CycleConfig {
    /// Validates raw durations and builds a configuration.
    ///
    /// The threshold must be shorter than both phases so that the near-end
    /// alert can never coincide with a phase boundary. A threshold of 0
    /// disables the alert.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonPositiveDuration`] if either duration is ≤ 0
    /// - [`ConfigError::DurationTooLarge`] if a duration exceeds `u32::MAX`
    /// - [`ConfigError::ThresholdOutOfRange`] if the threshold is negative or
    ///   not below the shorter duration
    pub fn configure(
        work_seconds: i64,
        break_seconds: i64,
        alert_threshold_seconds: i64,
    ) -> Result<Self, ConfigError> {
        if work_seconds <= 0 || break_seconds <= 0 {
            return Err(ConfigError::NonPositiveDuration {
                work_seconds,
                break_seconds,
            });
        }

        let work = to_seconds(work_seconds)?;
        let brk = to_seconds(break_seconds)?;

        let limit = work.min(brk);
        if alert_threshold_seconds < 0 || alert_threshold_seconds >= i64::from(limit) {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold_seconds: alert_threshold_seconds,
                limit_seconds: i64::from(limit),
            });
        }

        Ok(Self {
            work_seconds: work,
            break_seconds: brk,
            alert_threshold_seconds: to_seconds(alert_threshold_seconds)?,
            apply_immediately: true,
        })
    }

    /// Builds a configuration from minute/second pairs.
    ///
    /// Each duration is `minutes * 60 + extra_seconds`.
    ///
    /// # Errors
    ///
    /// Same as [`CycleConfig::configure`].
    pub fn from_minutes(
        work_minutes: i64,
        work_extra_seconds: i64,
        break_minutes: i64,
        break_extra_seconds: i64,
        alert_threshold_seconds: i64,
    ) -> Result<Self, ConfigError> {
        let work = work_minutes
            .saturating_mul(60)
            .saturating_add(work_extra_seconds);
        let brk = break_minutes
            .saturating_mul(60)
            .saturating_add(break_extra_seconds);
        Self::configure(work, brk, alert_threshold_seconds)
    }

    /// Sets the reconfiguration policy.
    ///
    /// `true` resets the running phase to its new duration right away;
    /// `false` defers the new durations to the next phase switch.
    #[must_use]
    pub fn with_apply_immediately(mut self, apply_immediately: bool) -> Self {
        self.apply_immediately = apply_immediately;
        self
    }

    /// Work duration in seconds.
    pub fn work_seconds(&self) -> u32 {
        self.work_seconds
    }

    /// Break duration in seconds.
    pub fn break_seconds(&self) -> u32 {
        self.break_seconds
    }

    /// Near-end alert threshold in seconds (0 = disabled).
    pub fn alert_threshold_seconds(&self) -> u32 {
        self.alert_threshold_seconds
    }

    /// Whether a reconfiguration while running takes effect immediately.
    pub fn apply_immediately(&self) -> bool {
        self.apply_immediately
    }

    /// Returns true if the near-end alert is enabled.
    pub fn alert_enabled(&self) -> bool {
        self.alert_threshold_seconds > 0
    }

    /// Configured duration of the given phase.
    pub fn duration_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Break => self.break_seconds,
        }
    }
}

fn to_seconds(value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::DurationTooLarge { seconds: value })
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// The engine's complete externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Current phase
    pub phase: Phase,
    /// Running, paused or idle
    pub state: RunState,
    /// Seconds left in the current phase (0 while idle)
    pub remaining_seconds: u32,
}

impl TimerSnapshot {
    /// The snapshot of an engine with no active cycle.
    pub const IDLE: Self = Self {
        phase: Phase::Work,
        state: RunState::Idle,
        remaining_seconds: 0,
    };

    /// Returns true if the timer is counting down.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Returns true if no cycle is active.
    pub fn is_idle(&self) -> bool {
        self.state == RunState::Idle
    }

    /// Remaining time rendered as `mm:ss`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Renders seconds as `mm:ss`, both fields zero-padded to two digits.
///
/// Minutes are not wrapped into hours, so 100 minutes renders as `100:00`.
///
/// ```
/// use cycle_timer::types::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(1500), "25:00");
/// assert_eq!(format_clock(69), "01:09");
/// ```
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Phase / RunState Tests
    // ------------------------------------------------------------------------

    mod phase_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(Phase::default(), Phase::Work);
        }

        #[test]
        fn test_other_alternates() {
            assert_eq!(Phase::Work.other(), Phase::Break);
            assert_eq!(Phase::Break.other(), Phase::Work);
            assert_eq!(Phase::Work.other().other(), Phase::Work);
        }

        #[test]
        fn test_as_str_and_label() {
            assert_eq!(Phase::Work.as_str(), "work");
            assert_eq!(Phase::Break.as_str(), "break");
            assert_eq!(Phase::Work.label(), "Work");
            assert_eq!(Phase::Break.to_string(), "break");
        }

        #[test]
        fn test_serialize() {
            assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"break\"");
            assert_eq!(
                serde_json::to_string(&RunState::Running).unwrap(),
                "\"running\""
            );
        }

        #[test]
        fn test_run_state_default_is_idle() {
            assert_eq!(RunState::default(), RunState::Idle);
            assert_eq!(RunState::Paused.as_str(), "paused");
        }
    }

    // ------------------------------------------------------------------------
    // CycleConfig Tests
    // ------------------------------------------------------------------------

    mod cycle_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = CycleConfig::default();
            assert_eq!(config.work_seconds(), 1500);
            assert_eq!(config.break_seconds(), 300);
            assert_eq!(config.alert_threshold_seconds(), 10);
            assert!(config.apply_immediately());
        }

        #[test]
        fn test_configure_success() {
            let config = CycleConfig::configure(1500, 300, 10).unwrap();
            assert_eq!(config, CycleConfig::default());
            assert_eq!(config.duration_for(Phase::Work), 1500);
            assert_eq!(config.duration_for(Phase::Break), 300);
        }

        #[test]
        fn test_configure_minimum_values() {
            let config = CycleConfig::configure(1, 1, 0).unwrap();
            assert_eq!(config.work_seconds(), 1);
            assert!(!config.alert_enabled());
        }

        #[test]
        fn test_configure_zero_work() {
            assert!(matches!(
                CycleConfig::configure(0, 300, 10),
                Err(ConfigError::NonPositiveDuration { .. })
            ));
        }

        #[test]
        fn test_configure_negative_break() {
            assert!(matches!(
                CycleConfig::configure(1500, -5, 0),
                Err(ConfigError::NonPositiveDuration { .. })
            ));
        }

        #[test]
        fn test_duration_checked_before_threshold() {
            assert!(matches!(
                CycleConfig::configure(0, 0, -1),
                Err(ConfigError::NonPositiveDuration { .. })
            ));
        }

        #[test]
        fn test_configure_threshold_negative() {
            assert!(matches!(
                CycleConfig::configure(1500, 300, -1),
                Err(ConfigError::ThresholdOutOfRange { .. })
            ));
        }

        #[test]
        fn test_configure_threshold_equal_to_shorter_phase() {
            assert_eq!(
                CycleConfig::configure(1500, 300, 300),
                Err(ConfigError::ThresholdOutOfRange {
                    threshold_seconds: 300,
                    limit_seconds: 300,
                })
            );
            assert!(CycleConfig::configure(1500, 300, 299).is_ok());
        }

        #[test]
        fn test_configure_threshold_uses_shorter_work_phase() {
            assert!(CycleConfig::configure(20, 300, 20).is_err());
            assert!(CycleConfig::configure(20, 300, 19).is_ok());
        }

        #[test]
        fn test_configure_too_large() {
            assert_eq!(
                CycleConfig::configure(i64::from(u32::MAX) + 1, 300, 0),
                Err(ConfigError::DurationTooLarge {
                    seconds: i64::from(u32::MAX) + 1
                })
            );
        }

        #[test]
        fn test_from_minutes() {
            let config = CycleConfig::from_minutes(25, 30, 5, 0, 10).unwrap();
            assert_eq!(config.work_seconds(), 1530);
            assert_eq!(config.break_seconds(), 300);
        }

        #[test]
        fn test_from_minutes_zero() {
            assert!(matches!(
                CycleConfig::from_minutes(0, 0, 5, 0, 0),
                Err(ConfigError::NonPositiveDuration { .. })
            ));
        }

        #[test]
        fn test_from_minutes_saturates_to_too_large() {
            assert!(matches!(
                CycleConfig::from_minutes(i64::MAX, 0, 5, 0, 0),
                Err(ConfigError::DurationTooLarge { .. })
            ));
        }

        #[test]
        fn test_with_apply_immediately() {
            let config = CycleConfig::default().with_apply_immediately(false);
            assert!(!config.apply_immediately());
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = CycleConfig::configure(60, 30, 5)
                .unwrap()
                .with_apply_immediately(false);
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: CycleConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // TimerSnapshot / format_clock Tests
    // ------------------------------------------------------------------------

    mod snapshot_tests {
        use super::*;

        #[test]
        fn test_idle_snapshot() {
            let snapshot = TimerSnapshot::default();
            assert_eq!(snapshot, TimerSnapshot::IDLE);
            assert!(snapshot.is_idle());
            assert_eq!(snapshot.remaining_seconds, 0);
        }

        #[test]
        fn test_clock() {
            let snapshot = TimerSnapshot {
                phase: Phase::Break,
                state: RunState::Paused,
                remaining_seconds: 299,
            };
            assert!(snapshot.is_paused());
            assert_eq!(snapshot.clock(), "04:59");
        }

        #[test]
        fn test_serialize() {
            let snapshot = TimerSnapshot {
                phase: Phase::Work,
                state: RunState::Running,
                remaining_seconds: 42,
            };
            let json = serde_json::to_string(&snapshot).unwrap();
            assert_eq!(
                json,
                r#"{"phase":"work","state":"running","remaining_seconds":42}"#
            );
        }

        #[test]
        fn test_format_clock() {
            assert_eq!(format_clock(0), "00:00");
            assert_eq!(format_clock(9), "00:09");
            assert_eq!(format_clock(60), "01:00");
            assert_eq!(format_clock(90), "01:30");
            assert_eq!(format_clock(25 * 60), "25:00");
            assert_eq!(format_clock(120 * 60 + 59), "120:59");
        }
    }
}
