//! Interval Timer Library
//!
//! This library provides a deterministic work/break countdown engine and
//! a reference terminal host around it. It includes:
//! - Cycle configuration with validation
//! - Timer engine: the Work ⇄ Break state machine and its events
//! - Notification and permission ports, with console and mock notifiers
//! - Host runtime: shared engine handle, one-second clock, event dispatcher
//! - CLI command parsing, interactive session and display utilities

pub mod cli;
pub mod engine;
pub mod host;
pub mod notification;
pub mod types;

// Re-export commonly used types for convenience
pub use engine::{TimerEngine, TimerEvent};
pub use types::{format_clock, ConfigError, CycleConfig, Phase, RunState, TimerSnapshot};

// Re-export notification types
pub use notification::{
    ConsoleNotifier, MockNotifier, NotificationContent, NotificationPort, NotifyError,
    OutputFormat, PermissionFlag, PermissionPort,
};

// Re-export host types
pub use host::{Clock, DispatchStats, Dispatcher, TimerService};
