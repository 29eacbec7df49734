//! Error types for parsing, querying and serializing JSON documents.

use thiserror::Error;

/// Errors that can occur while building, querying or writing a document.
///
/// A query that matches nothing is not an error, and neither is asking a
/// value for a payload of the wrong kind.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not valid JSON (ingestion path).
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The path string does not follow the `$` / `.name` / `[index]` grammar.
    /// `position` is the byte offset where the scan stopped.
    #[error("malformed path at byte {position}: {reason}")]
    MalformedPath { position: usize, reason: String },

    /// The value has no JSON text form (NaN or infinite doubles).
    #[error("Encoding error: {0}")]
    Encode(String),
}

impl JsonError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        JsonError::MalformedPath {
            position,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout jsoncons-core.
pub type Result<T> = std::result::Result<T, JsonError>;
