//! SurrealDB implementation of [`UserRepository`].
//!
//! Password hashing uses Argon2id with the crate's default parameters
//! and a randomly generated salt per hash. Plaintext never reaches
//! the database: `upsert_admin` hashes before writing, and repeated
//! runs leave exactly one account per email.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher};
use inmo_core::error::InmoResult;
use inmo_core::models::user::{UpsertAdmin, User, UserRole};
use inmo_core::repository::UserRepository;
use serde::Deserialize;
use surrealdb::sql::Datetime;
use surrealdb::{Connection, Surreal};
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct that includes the record ID via `record::id(id)`.
#[derive(Debug, Deserialize)]
struct UserRowWithId {
    record_id: String,
    email: String,
    name: String,
    password_hash: String,
    role: String,
    created_at: Datetime,
    updated_at: Datetime,
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        let role = UserRole::from_wire(&self.role)
            .ok_or_else(|| DbError::Decode(format!("user {id}: unknown role '{}'", self.role)))?;
        Ok(User {
            id,
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at.0,
            updated_at: self.updated_at.0,
        })
    }
}

fn hash_password(password: &str) -> Result<String, DbError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbError::Query(format!("password hashing failed: {e}")))
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn find_by_email(&self, email: &str) -> InmoResult<Option<User>> {
        let email_owned = email.to_string();

        let mut result = self
            .db
            .query(
                "SELECT record::id(id) AS record_id, * OMIT id \
                 FROM user WHERE email = $email",
            )
            .bind(("email", email_owned))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_user()?)),
            None => Ok(None),
        }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn get_by_email(&self, email: &str) -> InmoResult<User> {
        self.find_by_email(email).await?.ok_or_else(|| {
            DbError::NotFound {
                entity: "user".into(),
                id: format!("email={email}"),
            }
            .into()
        })
    }

    async fn upsert_admin(&self, input: UpsertAdmin) -> InmoResult<User> {
        let password_hash = hash_password(&input.password)?;

        // Upsert keyed by the unique email index: update in place when
        // the account exists, create it otherwise.
        if let Some(existing) = self.find_by_email(&input.email).await? {
            let id_str = existing.id.to_string();

            let result = self
                .db
                .query(
                    "UPDATE type::thing('user', $id) SET \
                     name = $name, password_hash = $password_hash, \
                     updated_at = time::now()",
                )
                .bind(("id", id_str.clone()))
                .bind(("name", input.name))
                .bind(("password_hash", password_hash))
                .await
                .map_err(DbError::from)?;

            result.check().map_err(|e| DbError::Query(e.to_string()))?;

            return self.get_by_email(&input.email).await;
        }

        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::thing('user', $id) SET \
                 email = $email, name = $name, \
                 password_hash = $password_hash, role = 'ADMIN'",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email.clone()))
            .bind(("name", input.name))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        result.check().map_err(|e| DbError::Query(e.to_string()))?;

        self.get_by_email(&input.email).await
    }
}
