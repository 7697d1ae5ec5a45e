use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The line-item store could not be read or written. The failing call changed nothing.
    #[error("Cart storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// A product was added with a quantity below 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// No open cart session has this id.
    #[error("Cart session not found: {0}")]
    SessionNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
