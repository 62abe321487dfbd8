//! Error types for interpretation and reading sessions.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur outside the derivation core.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Configuration is invalid or incomplete.
    #[error("config error: {0}")]
    Config(String),

    /// The prompt template could not be loaded or rendered.
    #[error("template error: {0}")]
    Template(String),

    /// The text-generation backend failed or returned an unusable response.
    #[error("backend error: {0}")]
    Backend(String),

    /// A session command was malformed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The session has no reading to operate on.
    #[error("no readings yet")]
    NoReadings,

    /// The requested reading number does not exist.
    #[error("reading {0} not found")]
    UnknownReading(usize),

    /// Core derivation or validation error.
    #[error("{0}")]
    Core(#[from] mh_core::CoreError),
}
