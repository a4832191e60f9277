//! Custom error types for Libris
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Libris operations
#[derive(Error, Debug)]
pub enum LibrisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// No copy of the title is on the shelf
    #[error("Book is not available for borrowing: {title}")]
    NotAvailable { title: String },

    /// The catalog was changed in memory but could not be written to disk
    #[error("Catalog changed but could not be saved: {0}")]
    Persistence(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LibrisError {
    /// Create a "not found" error for a title missing from the shelf
    pub fn book_not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: title.into(),
        }
    }

    /// Create a "not found" error for a title/borrower pair missing from the ledger
    pub fn loan_not_found(title: &str, borrower: &str) -> Self {
        Self::NotFound {
            entity_type: "Loan",
            identifier: format!("'{}' borrowed by {}", title, borrower),
        }
    }

    /// Create a "not available" error
    pub fn not_available(title: impl Into<String>) -> Self {
        Self::NotAvailable {
            title: title.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "not available" error
    pub fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable { .. })
    }

    /// Check if this is a persistence error.
    ///
    /// The in-memory mutation that produced it has already taken effect.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LibrisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibrisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Libris operations
pub type LibrisResult<T> = Result<T, LibrisError>;
