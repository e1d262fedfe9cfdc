//! Credential verification.
//!
//! Two interchangeable verifiers implement the same contract: the
//! database-backed one is authoritative and used with the SurrealDB
//! backend; the demo one holds a single fixed account and is only
//! selected together with the local store backend. They are never
//! merged.

use inmo_core::error::InmoResult;
use inmo_core::models::user::{User, UserRole};
use inmo_core::repository::UserRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AuthError;
use crate::password;

/// The account a successful verification yields. Carries no password
/// material: the stored hash never crosses this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Contract: confirm an email/password pair against a known account.
/// Denial is reported as [`InmoError::AuthenticationFailed`] without
/// revealing whether the email exists.
///
/// [`InmoError::AuthenticationFailed`]: inmo_core::error::InmoError::AuthenticationFailed
pub trait CredentialVerifier: Send + Sync {
    fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = InmoResult<AuthenticatedUser>> + Send;
}

/// Database-backed verifier: unique-email lookup plus Argon2id
/// comparison against the stored hash.
#[derive(Clone)]
pub struct DbCredentialVerifier<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> DbCredentialVerifier<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: UserRepository> CredentialVerifier for DbCredentialVerifier<R> {
    async fn verify(&self, email: &str, password: &str) -> InmoResult<AuthenticatedUser> {
        let user = match self.repo.get_by_email(email).await {
            Ok(user) => user,
            Err(inmo_core::InmoError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let valid = password::verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.into())
    }
}

/// Fixed demo account for the local backend.
pub const DEMO_EMAIL: &str = "admin@inmoapp.com";
pub const DEMO_PASSWORD: &str = "admin123";
const DEMO_NAME: &str = "Admin Demo";
const DEMO_USER_ID: Uuid = Uuid::from_u128(0xdeb0_ad11_0000_0000_0000_0000_0000_0001);

/// Demo verifier: exactly one known email/password pair, everything
/// else denied.
#[derive(Debug, Clone, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    async fn verify(&self, email: &str, password: &str) -> InmoResult<AuthenticatedUser> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            Ok(AuthenticatedUser {
                id: DEMO_USER_ID,
                email: DEMO_EMAIL.into(),
                name: DEMO_NAME.into(),
                role: UserRole::Admin,
            })
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }
}
