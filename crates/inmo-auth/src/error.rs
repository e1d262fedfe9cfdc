//! Authentication error types.

use inmo_core::error::InmoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately does not say
    /// which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for InmoError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => InmoError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => InmoError::Crypto(msg),
        }
    }
}
