//! Unified error type for the storefront
//!
//! Every failure carries an [`ErrorCode`] identifying the kind of error plus
//! a human-readable message. Nothing in the core is fatal: storage failures
//! degrade to an empty list and catalog misses surface as a not-found state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Standardized error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested resource does not exist
    NotFound,
    /// Request was malformed or violated a precondition
    InvalidRequest,
    /// Saved record could not be parsed
    StorageCorrupted,
    /// Filesystem operation failed
    IoError,
    /// Serialization or deserialization failed
    SerializationError,
}

impl ErrorCode {
    /// Default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::StorageCorrupted => "Stored record is corrupt",
            Self::IoError => "IO error",
            Self::SerializationError => "Serialization error",
        }
    }
}

/// Application error with a structured code
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a corrupt storage error
    pub fn storage_corrupted(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageCorrupted, msg)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::with_message(ErrorCode::IoError, e.to_string())
    }
}
