//! Error types shared across the vidutils core library.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors surfaced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start {tool}: {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed ({status}): {output}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        output: String,
    },

    /// ffprobe's own structured error message, preferred over a
    /// generic process failure when both are available.
    #[error("{0}")]
    ProbeReported(String),

    #[error("Failed to parse {tool} output: {message}")]
    JsonParse { tool: String, message: String },

    #[error("invalid codec ({0}) specified")]
    InvalidCodec(String),

    #[error("quality preset {0} is undefined")]
    UnknownPreset(String),

    #[error("please specify at least one valid quality preset")]
    NoValidPresets,

    #[error("External dependency not found: {0}")]
    DependencyNotFound(String),
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a tool that could not be spawned.
pub fn command_start_error(tool: impl Into<String>, source: std::io::Error) -> CoreError {
    CoreError::CommandStart {
        tool: tool.into(),
        source,
    }
}

/// Builds a `CommandFailed` error embedding the captured combined output.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    output: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status,
        output: output.into(),
    }
}
