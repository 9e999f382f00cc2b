//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::ContactField;
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required contact field was not supplied
    #[error("Invalid argument: {field} cannot be null")]
    InvalidArgument { field: ContactField },
}

impl RegistryError {
    /// Machine-readable kind, as reported in session error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// The field that caused the failure.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidArgument { field } => *field,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that end a registry session.
///
/// Malformed requests are answered in-band and never surface here; only
/// transport failures do.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading a request or writing a response failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be encoded
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
