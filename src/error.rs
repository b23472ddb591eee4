//! Error types for seo-head.
//!
//! This module defines the error types returned by head mutation operations.

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A structured-data payload could not be serialized to JSON.
    ///
    /// This indicates a caller programming error (a non-serializable
    /// payload), not an environment issue, and is surfaced even when
    /// mutation failures are being swallowed.
    #[error("structured data serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A head mutation could not be applied.
    #[error("head mutation failed: {0}")]
    Mutation(String),
}

impl Error {
    /// Mutation failure for a parsed document that carries no head element.
    pub(crate) fn missing_head() -> Self {
        Self::Mutation("document has no head element".to_string())
    }
}

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;
