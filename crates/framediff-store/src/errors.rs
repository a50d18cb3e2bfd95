//! Error handling for framediff-store
//!
//! Wraps framediff-core FdError with store-specific helpers

use framediff_core::errors::{FdError, FdErrorKind};

/// Result type alias using FdError
pub type Result<T> = std::result::Result<T, FdError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> FdError {
    FdError::new(FdErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an invalid-model error (malformed bytes or schema mismatch)
pub fn invalid_model(operation: &str, reason: impl Into<String>) -> FdError {
    FdError::new(FdErrorKind::InvalidModel)
        .with_op(operation.to_string())
        .with_message(reason)
}

/// Create a missing-field error
pub fn missing_field(operation: &str, field: &str) -> FdError {
    FdError::new(FdErrorKind::MissingField)
        .with_op(operation.to_string())
        .with_message(format!("required field `{}` is absent", field))
}

/// Create a serialization error from serde_json::Error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> FdError {
    FdError::new(FdErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an identity-conflict error for a duplicated element id
pub fn identity_conflict(operation: &str, element_id: impl Into<String>) -> FdError {
    FdError::new(FdErrorKind::IdentityConflict)
        .with_op(operation.to_string())
        .with_element_id(element_id)
        .with_message("duplicate element identity in model file")
}
