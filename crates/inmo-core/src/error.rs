//! Error types for the InmoApp core.

use std::collections::BTreeMap;

use thiserror::Error;

/// Per-field validation failures: field name mapped to every violated
/// constraint's message, not just the first one.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum InmoError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation failed on {} field(s)", errors.len())]
    Validation { errors: FieldErrors },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored data could not be decoded: {context}")]
    Decode { context: String },

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InmoResult<T> = Result<T, InmoError>;

impl InmoError {
    /// Single-field validation failure helper.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        InmoError::Validation { errors }
    }
}
