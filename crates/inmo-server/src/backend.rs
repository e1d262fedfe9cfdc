//! Backend selection: enum dispatch over the two repository and
//! verifier implementations, chosen once at startup.

use inmo_auth::verifier::{AuthenticatedUser, CredentialVerifier, DbCredentialVerifier, DemoVerifier};
use inmo_core::error::InmoResult;
use inmo_core::models::property::{NewProperty, Property, PropertyPatch};
use inmo_core::repository::PropertyRepository;
use inmo_db::{SurrealPropertyRepository, SurrealUserRepository};
use inmo_store::LocalPropertyRepository;
use surrealdb::engine::remote::ws::Client;
use uuid::Uuid;

/// The property repository the server was started with.
#[derive(Clone)]
pub enum PropertyBackend {
    Surreal(SurrealPropertyRepository<Client>),
    Local(LocalPropertyRepository),
}

impl PropertyRepository for PropertyBackend {
    async fn list(&self) -> InmoResult<Vec<Property>> {
        match self {
            PropertyBackend::Surreal(repo) => repo.list().await,
            PropertyBackend::Local(repo) => repo.list().await,
        }
    }

    async fn get(&self, id: Uuid) -> InmoResult<Property> {
        match self {
            PropertyBackend::Surreal(repo) => repo.get(id).await,
            PropertyBackend::Local(repo) => repo.get(id).await,
        }
    }

    async fn create(&self, input: NewProperty) -> InmoResult<Property> {
        match self {
            PropertyBackend::Surreal(repo) => repo.create(input).await,
            PropertyBackend::Local(repo) => repo.create(input).await,
        }
    }

    async fn update(&self, id: Uuid, patch: PropertyPatch) -> InmoResult<Property> {
        match self {
            PropertyBackend::Surreal(repo) => repo.update(id, patch).await,
            PropertyBackend::Local(repo) => repo.update(id, patch).await,
        }
    }

    async fn delete(&self, id: Uuid) -> InmoResult<()> {
        match self {
            PropertyBackend::Surreal(repo) => repo.delete(id).await,
            PropertyBackend::Local(repo) => repo.delete(id).await,
        }
    }
}

/// The credential verifier paired with the chosen backend. The
/// database-backed verifier is authoritative; the demo verifier only
/// runs with the local store.
#[derive(Clone)]
pub enum VerifierBackend {
    Db(DbCredentialVerifier<SurrealUserRepository<Client>>),
    Demo(DemoVerifier),
}

impl CredentialVerifier for VerifierBackend {
    async fn verify(&self, email: &str, password: &str) -> InmoResult<AuthenticatedUser> {
        match self {
            VerifierBackend::Db(verifier) => verifier.verify(email, password).await,
            VerifierBackend::Demo(verifier) => verifier.verify(email, password).await,
        }
    }
}
