//! Custom error types for LibraNet
//!
//! This module defines the error hierarchy for the catalog using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for LibraNet operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Borrow duration could not be turned into a day count
    #[error("Error parsing duration: {0}")]
    DurationParse(String),

    /// Persisted record carries a discriminator we don't know
    #[error("Unknown item type: '{0}'")]
    UnknownVariant(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LibraryError {
    /// Create a "not found" error for catalog items
    pub fn item_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown discriminator error
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant(_))
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for LibraNet operations
pub type LibraryResult<T> = Result<T, LibraryError>;
