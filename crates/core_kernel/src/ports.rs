//! Port infrastructure shared by the domain store traits
//!
//! Each domain defines an async store port; adapters (in-memory, PostgreSQL)
//! implement them. All port operations report through [`PortError`] so
//! callers treat every adapter uniformly: validation failures never reach an
//! adapter, conflicts come from lifecycle rules, and anything connection-
//! shaped is a transport failure the user may retry manually.

use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation conflicts with current state
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input rejected by a store-side constraint
    #[error("validation error: {0}")]
    Validation(String),

    /// The underlying store is unreachable or failed mid-request
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PortError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        PortError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        PortError::Unavailable(message.into())
    }
}
