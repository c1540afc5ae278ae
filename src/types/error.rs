//! Error types for Lectern

use serde::Serialize;

/// Main error type for Lectern operations
///
/// Covers process plumbing only: store loading and server startup.
/// Client-visible lookup failures never pass through here; the routes
/// answer those with fixed 404 envelopes ([`ErrorBody`]).
#[derive(Debug, thiserror::Error)]
pub enum LecternError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Record error: {0}")]
    Record(String),
}

// Implement From conversions for the error types the plumbing produces

impl From<std::io::Error> for LecternError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LecternError {
    fn from(err: serde_json::Error) -> Self {
        Self::Record(err.to_string())
    }
}

/// Result type alias for Lectern operations
pub type Result<T> = std::result::Result<T, LecternError>;

/// Wire shape of every client-visible error payload.
///
/// All lookup failures share this envelope with a fixed message per
/// resource kind; the `error` flag is always `true`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub status: u16,
    pub message: &'static str,
}

impl ErrorBody {
    /// Envelope for a 404 with the given fixed message.
    pub fn not_found(message: &'static str) -> Self {
        Self {
            error: true,
            status: 404,
            message,
        }
    }
}
