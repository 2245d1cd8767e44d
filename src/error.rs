//! Error taxonomy for widget invocations.
//!
//! Configuration mistakes are caught before the terminal is touched, so
//! they never need restoration. Everything that happens after raw mode
//! is acquired exits through the session guard regardless of outcome.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Style name not present in the animation registry.
    #[error("unknown spinner style '{0}'")]
    UnknownStyle(String),

    /// Spinner invoked without a command to supervise.
    #[error("no command given to run")]
    EmptyCommand,

    /// Choose invoked with an empty candidate list on stdin.
    #[error("no choices read from stdin")]
    NoChoices,

    /// A widget session is already active in this process.
    #[error("another widget already owns the terminal")]
    TerminalBusy,

    /// The widget surface (stderr) is not attached to a terminal.
    #[error("stderr is not an interactive terminal")]
    NotInteractive,

    /// The supervised child process failed to start.
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Terminal or stdin I/O failure.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code reported for this error.
    ///
    /// Configuration errors exit 2, matching what clap reports for
    /// malformed flags; runtime failures exit 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnknownStyle(_) | Error::EmptyCommand | Error::NoChoices => 2,
            Error::TerminalBusy
            | Error::NotInteractive
            | Error::Spawn { .. }
            | Error::Io(_) => 1,
        }
    }
}
