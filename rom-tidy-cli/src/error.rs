use thiserror::Error;

use rom_tidy_lib::OrganizeError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Organize run or settings failure
    #[error("{0}")]
    Organize(#[from] OrganizeError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Log file could not be opened or the logger was already set
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
