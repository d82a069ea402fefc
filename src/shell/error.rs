//! Shell Error Types

use thiserror::Error;

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors raised while reading or running shell commands
#[derive(Debug, Error)]
pub enum ShellError {
    /// A line could not be parsed into a command
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// A command ran but did not produce the expected outcome
    #[error("{message}")]
    CommandFailed { message: String },

    /// Reading commands or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::CommandFailed {
            message: message.into(),
        }
    }

    /// Whether the shell can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
