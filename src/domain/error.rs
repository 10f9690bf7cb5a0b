use thiserror::Error;

use crate::domain::validator::{FieldErrors, ValidationError, ValidationErrorKind};

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more fields were rejected, including store uniqueness conflicts
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// A single field rejected as already taken
    pub fn uniqueness(field: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(
            field,
            ValidationError::uniqueness_violation(),
        ))
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Whether the store rejected a value as already taken
    pub fn is_uniqueness_violation(&self) -> bool {
        self.field_errors().is_some_and(|errors| {
            errors
                .iter()
                .any(|(_, e)| e.kind() == ValidationErrorKind::UniquenessViolation)
        })
    }
}
