// src/error.rs

//! Error types for page extraction and the surrounding application.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for page extractors.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Failure of a single page extraction.
///
/// Every variant is terminal for the document that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The source bytes are not valid in the declared encoding
    #[error("malformed {encoding} byte sequence at offset {offset}")]
    Decode { encoding: &'static str, offset: usize },

    /// An expected block or element is absent
    #[error("required block not found: {block}")]
    StructureNotFound { block: String },

    /// The number of extracted items differs from what the page must hold
    #[error("expected {expected} {item}, found {found}")]
    CountMismatch {
        item: String,
        expected: String,
        found: usize,
    },

    /// Text does not match the expected numeric or date pattern
    #[error("invalid {item}: {text:?}")]
    Format { item: String, text: String },

    /// The login failure marker is present
    #[error("login failed: check the username and password")]
    Authentication,
}

impl ExtractError {
    /// Create a missing-structure error.
    pub fn structure(block: impl Into<String>) -> Self {
        Self::StructureNotFound {
            block: block.into(),
        }
    }

    /// Create a count mismatch error.
    pub fn count(item: impl Into<String>, expected: impl fmt::Display, found: usize) -> Self {
        Self::CountMismatch {
            item: item.into(),
            expected: expected.to_string(),
            found,
        }
    }

    /// Create a format error for the offending text.
    pub fn format(item: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Format {
            item: item.into(),
            text: text.into(),
        }
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Page extraction failed
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mismatch_message() {
        let err = ExtractError::count("winning numbers", 6, 5);
        assert_eq!(err.to_string(), "expected 6 winning numbers, found 5");
    }

    #[test]
    fn test_extract_error_converts_into_app_error() {
        let err: AppError = ExtractError::Authentication.into();
        assert!(matches!(err, AppError::Extract(ExtractError::Authentication)));
    }
}
