//! Notification ports for the interval timer.
//!
//! The engine emits [`TimerEvent`]s and never looks at how they are shown.
//! This module defines the two host-side seams:
//!
//! - [`NotificationPort`]: delivers an event (console line, desktop
//!   notification, toast, vibration...)
//! - [`PermissionPort`]: whether the user allowed notifications at all
//!
//! # Example
//!
//! ```rust
//! use cycle_timer::engine::TimerEvent;
//! use cycle_timer::notification::{MockNotifier, NotificationPort};
//!
//! # async fn example() -> Result<(), cycle_timer::notification::NotifyError> {
//! let notifier = MockNotifier::new();
//! notifier.notify(&TimerEvent::Paused).await?;
//! assert_eq!(notifier.notification_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! A [`NotifyError`] never reaches the engine. The dispatcher in
//! [`crate::host`] logs it and keeps going.

pub mod console;
pub mod content;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub use self::console::{ConsoleNotifier, OutputFormat};
pub use self::content::{NotificationContent, NOTIFICATION_TITLE};
pub use self::error::NotifyError;

use crate::engine::TimerEvent;

// ============================================================================
// Ports
// ============================================================================

/// Delivers engine events to the user.
#[allow(async_fn_in_trait)]
pub trait NotificationPort {
    /// Shows one event.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails. Callers log and drop it.
    async fn notify(&self, event: &TimerEvent) -> Result<(), NotifyError>;

    /// Returns true if the delivery mechanism can be used at all.
    fn is_available(&self) -> bool;
}

/// Reports whether notifications are enabled.
pub trait PermissionPort {
    /// Returns true if the host may deliver notifications.
    fn notifications_enabled(&self) -> bool;
}

/// A fixed permission flag, set once from the command line.
#[derive(Debug, Clone, Copy)]
pub struct PermissionFlag {
    enabled: bool,
}

impl PermissionFlag {
    /// Creates a flag with the given value.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for PermissionFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PermissionPort for PermissionFlag {
    fn notifications_enabled(&self) -> bool {
        self.enabled
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Notifier that records events, for tests.
#[derive(Debug)]
pub struct MockNotifier {
    events: Mutex<Vec<TimerEvent>>,
    available: AtomicBool,
    should_fail: AtomicBool,
    delay: Mutex<Duration>,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
            should_fail: AtomicBool::new(false),
            delay: Mutex::new(Duration::ZERO),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Makes every `notify` call take this long before it records.
    pub fn set_delay(&self, delay: Duration) {
        if let Ok(mut current) = self.delay.lock() {
            *current = delay;
        }
    }

    #[must_use]
    pub fn get_events(&self) -> Vec<TimerEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn clear_recorded(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn current_delay(&self) -> Duration {
        self.delay.lock().map(|d| *d).unwrap_or(Duration::ZERO)
    }
}

impl NotificationPort for MockNotifier {
    async fn notify(&self, event: &TimerEvent) -> Result<(), NotifyError> {
        let delay = self.current_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotifyError::SendFailed("Mock failure".to_string()));
        }
        self.events
            .lock()
            .map_err(|_| NotifyError::SendFailed("mock poisoned".to_string()))?
            .push(*event);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
