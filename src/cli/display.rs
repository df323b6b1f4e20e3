//! Display utilities for the interval timer CLI.
//!
//! This module provides formatted output for:
//! - Timer snapshots
//! - Configuration summary
//! - Command help
//! - Error messages

use crate::types::{format_clock, CycleConfig, TimerSnapshot};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the current timer state.
    pub fn show_snapshot(snapshot: &TimerSnapshot) {
        println!("{}", Self::format_snapshot(snapshot));
    }

    /// Shows the active configuration.
    pub fn show_config(config: &CycleConfig) {
        println!("{}", Self::format_config(config));
    }

    /// Shows the list of interactive commands.
    pub fn show_help() {
        println!("commands:");
        println!("  start                       start a fresh work phase");
        println!("  pause | resume | toggle     suspend or continue the countdown");
        println!("  reset                       stop and return to idle");
        println!("  status                      show the remaining time");
        println!("  set <work> <break> [alert]  change durations (seconds)");
        println!("  quit                        end the session");
    }

    /// Shows a message for a session that has ended.
    pub fn show_session_end() {
        println!("session ended");
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats a snapshot as `[phase] state mm:ss`.
    pub fn format_snapshot(snapshot: &TimerSnapshot) -> String {
        if snapshot.is_idle() {
            return "[idle] --:--".to_string();
        }
        format!(
            "[{}] {} {}",
            snapshot.phase,
            snapshot.state,
            format_clock(snapshot.remaining_seconds)
        )
    }

    /// Formats a configuration summary.
    pub fn format_config(config: &CycleConfig) -> String {
        let alert = if config.alert_enabled() {
            format!("{}s", config.alert_threshold_seconds())
        } else {
            "off".to_string()
        };
        let policy = if config.apply_immediately() {
            "immediate"
        } else {
            "next phase"
        };
        format!(
            "work {} / break {} / alert {} / changes apply: {}",
            format_clock(config.work_seconds()),
            format_clock(config.break_seconds()),
            alert,
            policy
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
