//! CLI module for the interval timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Interactive command parsing
//! - `session`: Command loop driving the timer service
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
pub use input::{ParseCommandError, SessionCommand};
pub use session::{spawn_stdin_reader, Flow, Session, SessionEnd};
