//! Interactive commands typed while a session runs.
//!
//! One command per line, case-insensitive:
//! `start`, `pause`, `resume`, `toggle`, `reset`, `status`,
//! `set <work_sec> <break_sec> [alert_sec]`, `help`, `quit`.

use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// A numeric argument could not be parsed.
    #[error("invalid number for {name}: {value}")]
    InvalidNumber {
        /// Argument name
        name: &'static str,
        /// Raw text
        value: String,
    },

    /// A required argument is missing.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// More arguments than the command takes.
    #[error("too many arguments for {0}")]
    TooManyArguments(&'static str),
}

/// A command typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start a fresh cycle
    Start,
    /// Pause the countdown
    Pause,
    /// Resume the countdown
    Resume,
    /// Pause when running, resume when paused
    Toggle,
    /// Return to idle
    Reset,
    /// Show the current snapshot
    Status,
    /// Change durations
    Set {
        work_seconds: i64,
        break_seconds: i64,
        /// Keep the current threshold when omitted
        alert_seconds: Option<i64>,
    },
    /// Show the command list
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseCommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "start" | "s" => Self::Start,
            "pause" | "p" => Self::Pause,
            "resume" | "r" => Self::Resume,
            "toggle" | "t" => Self::Toggle,
            "reset" => Self::Reset,
            "status" | "st" => Self::Status,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "set" => {
                let work_seconds = number(words.next(), "work")?;
                let break_seconds = number(words.next(), "break")?;
                let alert_seconds = words
                    .next()
                    .map(|value| number(Some(value), "alert"))
                    .transpose()?;
                if words.next().is_some() {
                    return Err(ParseCommandError::TooManyArguments("set"));
                }
                return Ok(Some(Self::Set {
                    work_seconds,
                    break_seconds,
                    alert_seconds,
                }));
            }
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        if words.next().is_some() {
            return Err(ParseCommandError::TooManyArguments(command.name()));
        }
        Ok(Some(command))
    }

    /// The canonical name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Toggle => "toggle",
            Self::Reset => "reset",
            Self::Status => "status",
            Self::Set { .. } => "set",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or(ParseCommandError::MissingArgument("command"))
    }
}

fn number(word: Option<&str>, name: &'static str) -> Result<i64, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingArgument(name))?;
    word.parse().map_err(|_| ParseCommandError::InvalidNumber {
        name,
        value: word.to_string(),
    })
}
