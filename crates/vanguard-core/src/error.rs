//! Error types for the edges of the shell
//!
//! The session manager and the simulators never produce these: battery
//! depletion or an unknown app in the UI are ordinary state transitions.
//! Errors only come from config IO, the terminal, the message channel and
//! string lookups of app ids.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // Terminal
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // Configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// String key that names no catalog app
    #[error("Unknown app identifier: {id}")]
    UnknownApp { id: String },

    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unknown_app(id: impl Into<String>) -> Self {
        Self::UnknownApp { id: id.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// The shell can keep running (falling back to defaults or dropping
    /// the event)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownApp { .. }
                | Error::ChannelSend { .. }
                | Error::Config { .. }
                | Error::Toml(_)
        )
    }

    /// The terminal is unusable; the shell must exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::TerminalRestore(_))
    }
}

/// Log an error with context as it propagates
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like `context`, building the message only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", f(), err);
            err
        })
    }
}
