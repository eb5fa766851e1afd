use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop an organize run before it starts, or settings I/O fails.
///
/// Per-file problems (unreadable directories, failed copies) never surface
/// here; they are collected in the plan and summary instead.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source root does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Settings file could not be parsed
    #[error("Invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    /// Settings could not be serialized
    #[error("Could not serialize settings: {0}")]
    Serialize(String),

    /// Unknown multi-region policy name
    #[error("Unknown multi-region policy: '{0}' (expected match, unknown or exclude)")]
    UnknownPolicy(String),
}

impl OrganizeError {
    pub fn settings(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }
}
