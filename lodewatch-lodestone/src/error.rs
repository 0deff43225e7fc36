//! Lodestone error types.

use lodewatch_core::CoreError;
use lodewatch_fetch::FetchError;
use thiserror::Error;

// ============================================================================
// Lodestone Error
// ============================================================================

/// Error type for Lodestone operations.
///
/// Callers see exactly two failure kinds: the transport failed, or the
/// response bytes could not be interpreted as a document. A page that parses
/// but contains no recognizable worlds is an empty result, not an error.
#[derive(Debug, Error)]
pub enum LodestoneError {
    /// Transport failure while fetching the status page.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Response bytes could not be interpreted as a document.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

impl From<LodestoneError> for CoreError {
    fn from(err: LodestoneError) -> Self {
        match err {
            LodestoneError::Fetch(e) => CoreError::Transport(e.to_string()),
            LodestoneError::Document(e) => CoreError::MalformedDocument(e.to_string()),
        }
    }
}

// ============================================================================
// Document Error
// ============================================================================

/// Error type for document tree construction.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input bytes are not valid UTF-8.
    #[error("Page is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}
