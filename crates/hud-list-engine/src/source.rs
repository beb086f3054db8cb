//! Contract for the component that supplies and runs commands.

use std::io;
use thiserror::Error;

/// Errors an action source can report.
///
/// The engine never inspects these beyond logging them; callers that need
/// to react to failures wrap the source itself.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The source has no command with this name.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command process could not be started.
    #[error("Failed to start command '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The source cannot provide commands right now.
    #[error("Action source unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the source's channel failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Supplies the list of available commands and runs a chosen one.
///
/// Sources are shared with worker threads, hence `Send + Sync`.
pub trait ActionSource: Send + Sync {
    /// Current command names, in the order that becomes their insertion index.
    fn list_commands(&self) -> Result<Vec<String>, ActionError>;

    /// Run the command called `name`.
    fn execute(&self, name: &str) -> Result<(), ActionError>;
}
