//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;

/// Result type used across the workspace.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: callers surface it to the user and
/// keep prior state. Nothing here is retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed required field, or a duplicate id on create.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation targets an id that is not in the collection.
    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: RecordId },

    /// A formatter met a tag outside its closed lookup table.
    #[error("unknown {table} value: {value:?}")]
    UnknownEnumValue { table: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(collection: impl Into<String>, id: RecordId) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id,
        }
    }

    pub fn unknown_enum_value(table: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            table,
            value: value.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
