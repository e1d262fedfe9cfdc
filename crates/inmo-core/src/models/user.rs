//! Administrative account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Admin,
}

impl UserRole {
    pub fn as_wire(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// A provisioned account as stored by the backend.
///
/// `password_hash` is an Argon2id PHC string; plaintext is never
/// persisted and the hash must never cross the authentication
/// boundary (see `inmo-auth`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for the idempotent admin provisioning upsert, keyed by email.
/// The raw password is hashed before storage.
#[derive(Debug, Clone)]
pub struct UpsertAdmin {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Validated login credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}
