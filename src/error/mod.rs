//! Error handling for the thyroid pathway engine.
//!
//! The rule functions themselves are total and never fail. Errors only arise
//! at the boundary: loading and parsing records, validating them, and moving
//! through the pathway.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the pathway engine
#[derive(Debug, thiserror::Error)]
pub enum PathwayError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// IO error tied to a specific path
    #[error("{message}: {}", path.display())]
    FileError {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A label that does not name any variant of a closed value set
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    /// A record rejected by the validation boundary
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An attempt to move past either end of the pathway
    #[error("Navigation error: {0}")]
    NavigationError(String),
}

impl PathwayError {
    /// Create an invalid value error for a named field
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Create a navigation error
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::NavigationError(message.into())
    }

    /// Attach a path to an IO error
    pub fn file(message: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            path: path.into(),
            source,
        }
    }
}

/// Result type for pathway operations
pub type Result<T> = std::result::Result<T, PathwayError>;
