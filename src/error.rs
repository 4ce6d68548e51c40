//! Error types for the fogodoc library.

use std::io;
use thiserror::Error;

/// Result type alias for fogodoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or composing documents.
///
/// Rendering itself is total: [`crate::render_pdf`] cannot fail. Errors come
/// from the surrounding surfaces such as reading order files or decoding
/// order JSON.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding an order from JSON.
    #[error("Order decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
