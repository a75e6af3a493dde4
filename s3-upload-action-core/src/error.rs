//! Error types for the action and its collaborators.

use thiserror::Error;

/// Failure to retrieve a named action input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required input was absent or empty.
    #[error("Input required and not supplied: {name}")]
    Required { name: String },
}

/// Failure of an external command invocation.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Command line is empty")]
    EmptyCommand,

    #[error("Unable to locate executable file: {tool}: {source}")]
    NotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to spawn '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("The process '{tool}' failed with exit code {code}")]
    NonZeroExit { tool: String, code: i32 },

    /// The child was terminated by a signal and has no exit code.
    #[error("The process '{tool}' was terminated without an exit code")]
    Terminated { tool: String },
}

/// Failure to build the platform API client.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Invalid GITHUB_TOKEN header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors surfaced by [`crate::action::run_action`].
///
/// Only a missing required input can fail a run. Command and notice failures
/// are never observed by the action.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Input(#[from] InputError),
}
