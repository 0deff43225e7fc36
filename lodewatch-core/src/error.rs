//! Core error types for `lodewatch`.

use thiserror::Error;

/// Core error type for `lodewatch` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Transport failure while fetching the status page.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Input bytes could not be interpreted as a document.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
