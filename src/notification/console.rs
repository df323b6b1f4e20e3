//! Console notifier.
//!
//! Prints each notification as a text line or as a JSON object per line.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use super::content::NotificationContent;
use super::error::NotifyError;
use super::NotificationPort;
use crate::engine::TimerEvent;

/// How the console notifier renders notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[title] body`
    #[default]
    Text,
    /// One JSON object per line with the content and the raw event
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    content: &'a NotificationContent,
    event: &'a TimerEvent,
}

/// Notifier that writes to stdout or any other writer.
pub struct ConsoleNotifier<W: Write = io::Stdout> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl ConsoleNotifier<io::Stdout> {
    /// Creates a notifier printing to stdout.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl<W: Write> ConsoleNotifier<W> {
    /// Creates a notifier printing to the given writer.
    pub fn with_writer(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Consumes the notifier and returns the writer.
    pub fn into_inner(self) -> Option<W> {
        self.writer.into_inner().ok()
    }

    fn render(&self, event: &TimerEvent) -> Result<String, NotifyError> {
        let content = NotificationContent::for_event(event);
        match self.format {
            OutputFormat::Text => Ok(format!("[{}] {}", content.title, content.body)),
            OutputFormat::Json => serde_json::to_string(&JsonLine {
                content: &content,
                event,
            })
            .map_err(|e| NotifyError::SendFailed(e.to_string())),
        }
    }
}

impl<W: Write> NotificationPort for ConsoleNotifier<W> {
    async fn notify(&self, event: &TimerEvent) -> Result<(), NotifyError> {
        let line = self.render(event)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| NotifyError::SendFailed("console writer poisoned".to_string()))?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}
