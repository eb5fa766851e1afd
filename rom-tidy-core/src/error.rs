use thiserror::Error;

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone, Error)]
#[error("unknown platform: '{0}'")]
pub struct PlatformParseError(pub String);

/// Error returned when a string cannot be parsed into a `Region`.
#[derive(Debug, Clone, Error)]
#[error("unknown region: '{0}'")]
pub struct RegionParseError(pub String);

