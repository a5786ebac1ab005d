//! Custom error types for Ledgerly
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Ledgerly operations
#[derive(Error, Debug)]
pub enum LedgerlyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for form input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// The state container was used before the application context created it
    #[error("Store accessed before the application context was initialised")]
    NotInitialized,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Identity provider failures, carrying the provider's message
    #[error("Sign-in failed: {0}")]
    Auth(String),

    /// The one-time code did not match
    #[error("Invalid OTP")]
    InvalidCode,

    /// A scoped background task was cancelled before it completed
    #[error("Task cancelled")]
    Cancelled,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerlyError {
    /// Create a "not found" error for products
    pub fn product_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Product",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for services
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense definitions
    pub fn expense_definition_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense definition",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for routes
    pub fn route_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Route",
            identifier: identifier.into(),
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
}

impl From<std::io::Error> for LedgerlyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerlyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerlyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(format!("YAML: {}", err))
    }
}

impl From<csv::Error> for LedgerlyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(format!("CSV: {}", err))
    }
}

/// Result type alias for Ledgerly operations
pub type LedgerlyResult<T> = Result<T, LedgerlyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerlyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerlyError::product_not_found("prd-1234");
        assert_eq!(err.to_string(), "Product not found: prd-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_code_message() {
        assert_eq!(LedgerlyError::InvalidCode.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerlyError = io_err.into();
        assert!(matches!(err, LedgerlyError::Io(_)));
    }
}
