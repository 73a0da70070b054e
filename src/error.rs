//! Custom error types for budget-tracker
//!
//! Missing data (no budget, no transactions) is never an error; callers get
//! `Option`/empty collections instead. Everything here is a real failure.

use thiserror::Error;

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (period directories, budget and transaction files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from persisted storage
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Json(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
