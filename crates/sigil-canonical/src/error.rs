//! Error types for Sigil Canonical

use thiserror::Error;

/// Errors that can occur when converting a value into canonical JSON
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}
