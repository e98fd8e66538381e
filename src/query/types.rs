use thiserror::Error;

/// Failures produced by query operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The raw input does not parse as a non-negative integer.
    #[error("invalid index")]
    InvalidIndex,

    /// The index parsed but points past the end of the dataset.
    #[error("index out of range")]
    OutOfRange,

    /// No record matches the identifier or title query.
    #[error("no matching movie")]
    NotFound,
}
