//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Two property backends satisfy
//! the same contract (SurrealDB in `inmo-db`, the local store in
//! `inmo-store`); they are alternates selected at startup, never
//! reconciled with each other.

use uuid::Uuid;

use crate::error::InmoResult;
use crate::models::property::{NewProperty, Property, PropertyPatch};
use crate::models::user::{UpsertAdmin, User};

/// CRUD contract over the property collection.
///
/// Ordering guarantee: `list` returns listings by `created_at`
/// descending, ties broken by insertion order (most recently inserted
/// first). Per-id sequential consistency: once a write returns, a
/// subsequent `get` on the same id observes it. Concurrent updates to
/// the same id are last-write-wins.
pub trait PropertyRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = InmoResult<Vec<Property>>> + Send;

    /// Missing ids yield [`InmoError::NotFound`].
    ///
    /// [`InmoError::NotFound`]: crate::error::InmoError::NotFound
    fn get(&self, id: Uuid) -> impl Future<Output = InmoResult<Property>> + Send;

    /// Assigns `id`, `created_at` and `updated_at`, persists, and
    /// returns the stored record including backend-applied defaults.
    fn create(&self, input: NewProperty) -> impl Future<Output = InmoResult<Property>> + Send;

    /// Merges the patch onto the existing record, refreshes
    /// `updated_at`, and returns the merged record.
    fn update(
        &self,
        id: Uuid,
        patch: PropertyPatch,
    ) -> impl Future<Output = InmoResult<Property>> + Send;

    /// Deleting a missing id reports `NotFound`, never a silent
    /// success.
    fn delete(&self, id: Uuid) -> impl Future<Output = InmoResult<()>> + Send;
}

/// Account lookup and provisioning contract.
pub trait UserRepository: Send + Sync {
    /// Emails are unique; a missing account yields `NotFound`.
    fn get_by_email(&self, email: &str) -> impl Future<Output = InmoResult<User>> + Send;

    /// Idempotent upsert keyed by email. Hashes the supplied plaintext
    /// before storage; repeated runs leave exactly one account and
    /// never persist plaintext.
    fn upsert_admin(&self, input: UpsertAdmin) -> impl Future<Output = InmoResult<User>> + Send;
}
