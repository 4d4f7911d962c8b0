//! Error types for sqlgen

use thiserror::Error;

/// Result type alias for sqlgen operations
pub type SqlGenResult<T> = Result<T, SqlGenError>;

/// Errors surfaced by validation and configuration loading.
///
/// Chaining methods on [`SqlGenerator`](crate::SqlGenerator) never fail; they
/// record the first precondition violation instead, which is returned later by
/// [`SqlGenerator::validate`](crate::SqlGenerator::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlGenError {
    /// `in_`/`like` consumed the pending field, but no `where_field` staged one
    #[error("{operation}: no pending field (call where_field() first or pass the field explicitly)")]
    PendingFieldMissing { operation: &'static str },

    /// Statement is structurally incomplete (strict mode)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlGenError {
    /// Create a pending-field error for the given operation
    pub fn pending_field_missing(operation: &'static str) -> Self {
        Self::PendingFieldMissing { operation }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a pending-field error
    pub fn is_pending_field_missing(&self) -> bool {
        matches!(self, Self::PendingFieldMissing { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<toml::de::Error> for SqlGenError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
