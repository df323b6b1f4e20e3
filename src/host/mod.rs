//! Host runtime for the interval timer.
//!
//! This module wires the engine to the outside world:
//! - `service`: mutex-guarded engine handle shared by all tasks
//! - `clock`: one-second tick source built on `tokio::time::interval`
//! - `dispatch`: forwards engine events to a notification port

pub mod clock;
pub mod dispatch;
pub mod service;

pub use clock::{Clock, TICK_PERIOD};
pub use dispatch::{DispatchStats, Delivery, Dispatcher};
pub use service::TimerService;
