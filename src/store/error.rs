use thiserror::Error;

/// Errors raised by a line-item store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store could not be reached, read or written.
    #[error("Line-item store unavailable: {0}")]
    Unavailable(String),

    /// The persisted data exists but could not be decoded.
    #[error("Line-item store corrupt: {0}")]
    Corrupt(String),
}
