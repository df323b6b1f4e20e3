//! Interactive terminal session.
//!
//! Reads commands line by line and applies them to the shared
//! [`TimerService`]. The session ends on `quit`, end of input or Ctrl-C.
//! On the way out it resets an active timer and signals the clock to stop.

use anyhow::{Context, Result};
use tokio::sync::{mpsc, watch};

use super::display::Display;
use super::input::SessionCommand;
use crate::host::TimerService;

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit`
    Quit,
    /// Input was closed
    EndOfInput,
    /// Ctrl-C
    Interrupted,
}

/// Command loop for one timer session.
pub struct Session {
    service: TimerService,
}

impl Session {
    pub fn new(service: TimerService) -> Self {
        Self { service }
    }

    /// Runs until the user quits, input closes, or Ctrl-C arrives.
    pub async fn run(
        self,
        mut input: mpsc::UnboundedReceiver<String>,
        shutdown: watch::Sender<bool>,
    ) -> SessionEnd {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut signals = true;

        let end = loop {
            tokio::select! {
                line = input.recv() => match line {
                    Some(line) => {
                        if self.handle_line(&line).await == Flow::Quit {
                            break SessionEnd::Quit;
                        }
                    }
                    None => break SessionEnd::EndOfInput,
                },
                result = &mut ctrl_c, if signals => match result {
                    Ok(()) => break SessionEnd::Interrupted,
                    Err(e) => {
                        tracing::warn!(error = %e, "Ctrl-C handler unavailable");
                        signals = false;
                    }
                },
            }
        };

        if !self.service.snapshot().await.is_idle() {
            self.service.reset().await;
        }
        if shutdown.send(true).is_err() {
            tracing::debug!("clock already stopped");
        }

        tracing::info!(?end, "session ended");
        end
    }

    /// Parses and executes one input line.
    pub async fn handle_line(&self, line: &str) -> Flow {
        match SessionCommand::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Flow::Continue,
            Err(e) => {
                Display::show_error(&e.to_string());
                println!("type `help` for the command list");
                Flow::Continue
            }
        }
    }

    /// Executes one command.
    pub async fn execute(&self, command: SessionCommand) -> Flow {
        tracing::debug!(command = command.name(), "executing");

        let snapshot = match command {
            SessionCommand::Start => self.service.start().await,
            SessionCommand::Pause => self.service.pause().await,
            SessionCommand::Resume => self.service.resume().await,
            SessionCommand::Toggle => self.service.toggle().await,
            SessionCommand::Reset => self.service.reset().await,
            SessionCommand::Status => self.service.snapshot().await,
            SessionCommand::Set {
                work_seconds,
                break_seconds,
                alert_seconds,
            } => {
                let alert = match alert_seconds {
                    Some(alert) => alert,
                    None => i64::from(
                        self.service
                            .effective_config()
                            .await
                            .alert_threshold_seconds(),
                    ),
                };
                match self
                    .service
                    .reconfigure(work_seconds, break_seconds, alert)
                    .await
                {
                    Ok(snapshot) => {
                        Display::show_config(&self.service.effective_config().await);
                        snapshot
                    }
                    Err(e) => {
                        Display::show_error(&format!("{} ({})", e, e.suggestion()));
                        return Flow::Continue;
                    }
                }
            }
            SessionCommand::Help => {
                Display::show_help();
                return Flow::Continue;
            }
            SessionCommand::Quit => return Flow::Quit,
        };

        Display::show_snapshot(&snapshot);
        Flow::Continue
    }
}

/// Reads stdin on a dedicated thread and forwards each line.
///
/// A blocking read must not sit on a runtime worker, or shutdown would wait
/// for the next line. The thread ends when stdin closes or the receiver is
/// dropped.
///
/// # Errors
///
/// Returns an error if the reader thread cannot be spawned.
pub fn spawn_stdin_reader() -> Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read stdin");
                        break;
                    }
                }
            }
        })
        .context("Failed to spawn stdin reader thread")?;

    Ok(rx)
}
