//! Engine module for the interval timer.
//!
//! This module contains the core state machine:
//! - `timer`: Timer engine with phase switching, countdown and event generation

pub mod timer;

pub use timer::{TimerEngine, TimerEvent};
