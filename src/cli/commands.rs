//! Command definitions for the interval timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::notification::OutputFormat;
use crate::types::{ConfigError, CycleConfig};

// ============================================================================
// CLI Structure
// ============================================================================

/// Interval Timer CLI - work/break countdown in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "cycle-timer",
    version,
    about = "Work/break interval timer for the terminal",
    long_about = "Counts down alternating work and break phases, alerts shortly before \
                  each phase ends and announces every switch.\n\
                  Control the running timer by typing commands (type `help`).",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run an interactive timer session
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Work duration in minutes
    #[arg(short, long, default_value = "25")]
    pub work: i64,

    /// Extra seconds added to the work duration (0-59)
    #[arg(
        long,
        default_value = "0",
        value_parser = clap::value_parser!(i64).range(0..=59)
    )]
    pub work_seconds: i64,

    /// Break duration in minutes
    #[arg(short, long, default_value = "5")]
    pub break_time: i64,

    /// Extra seconds added to the break duration (0-59)
    #[arg(
        long,
        default_value = "0",
        value_parser = clap::value_parser!(i64).range(0..=59)
    )]
    pub break_seconds: i64,

    /// Near-end alert in seconds before a phase ends (0 disables)
    #[arg(short, long, default_value = "10")]
    pub alert: i64,

    /// Apply new durations at the next phase switch instead of immediately
    #[arg(long)]
    pub deferred: bool,

    /// Disable notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Wait for `start` instead of starting right away
    #[arg(long)]
    pub idle: bool,

    /// Print notifications as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            work: 25,
            work_seconds: 0,
            break_time: 5,
            break_seconds: 0,
            alert: 10,
            deferred: false,
            no_notify: false,
            idle: false,
            json: false,
        }
    }
}

impl RunArgs {
    /// Builds the cycle configuration described by these arguments.
    ///
    /// # Errors
    ///
    /// Returns the validation error for non-positive durations or an
    /// out-of-range alert.
    pub fn to_config(&self) -> Result<CycleConfig, ConfigError> {
        Ok(CycleConfig::from_minutes(
            self.work,
            self.work_seconds,
            self.break_time,
            self.break_seconds,
            self.alert,
        )?
        .with_apply_immediately(!self.deferred))
    }

    /// Output format for notifications.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
