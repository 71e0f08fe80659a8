//! Error type for feature-vector construction.

/// Errors raised when building a sparse or binary vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataVectorError {
    #[error("index {index} must be greater than the last stored index {last}")]
    IndexOrder { index: usize, last: usize },

    #[error("duplicate index {0}")]
    DuplicateIndex(usize),

    #[error("number of indices ({indices}) does not match number of values ({values})")]
    LengthMismatch { indices: usize, values: usize },
}
