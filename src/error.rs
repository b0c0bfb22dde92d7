//! Error types for the thumbgate pipeline.
//!
//! This module provides structured error handling using thiserror. The
//! pipeline surfaces exactly one domain error, parameterized by the MIME
//! label it refers to, so callers can distinguish "nothing recognized" from
//! "recognized but rejected or unhandled."

use thiserror::Error;

/// Main error type for thumbgate operations.
#[derive(Debug, Error)]
pub enum ThumbgateError {
    /// The MIME type of the input could not be detected as a supported type,
    /// was excluded by the caller's accept set, or has no processor. Carries
    /// the label in question: the `application/octet-stream` sentinel when
    /// nothing matched, otherwise the actually-detected label.
    #[error("unsupported MIME type: {0}")]
    UnsupportedMime(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for thumbgate operations
pub type Result<T> = std::result::Result<T, ThumbgateError>;
