//! Domain-level errors.
//!
//! These errors represent business rule violations raised by the registries.
//! They are independent of infrastructure concerns (HTTP, gRPC).

use thiserror::Error;

/// Domain-specific errors, each carrying the data a transport needs to
/// describe the failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required field is empty or a numeric field is out of range
    #[error("{message}")]
    ValidationFailed { field: String, message: String },

    /// No live entity has the requested identifier
    #[error("{resource} not found (id: {id})")]
    NotFound { resource: String, id: String },

    /// A unique field collides with another live entity
    #[error("{resource} already exists ({field}: {value})")]
    AlreadyExists {
        resource: String,
        field: String,
        value: String,
    },

    /// Unexpected failure inside the store
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(
        resource: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        DomainError::AlreadyExists {
            resource: resource.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
