//! Domain Layer - Errors
//!
//! Every layer above the domain reports failures through `DomainError`.
//! Command handlers flatten it to a `String` for the app shell.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected user input; the message is shown to the user as-is
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Image library / camera access was refused
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The key-value layer failed to read or write
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Text for the blocking alert shown to the user
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::PermissionDenied(msg)
            | DomainError::Storage(msg)
            | DomainError::Config(msg)
            | DomainError::Internal(msg) => msg,
        }
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
