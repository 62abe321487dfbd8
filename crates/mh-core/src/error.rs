//! Error types for hexagram derivation.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller-side validation rejected the divination input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A table lookup that cannot fail for valid line data did fail.
    ///
    /// This indicates a defect in the trigram tables or the line flip, never
    /// bad user input.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}
