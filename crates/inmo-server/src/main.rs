//! InmoApp Server — application entry point.

use inmo_auth::{DbCredentialVerifier, DemoVerifier};
use inmo_core::models::user::UpsertAdmin;
use inmo_core::repository::UserRepository;
use inmo_db::{DbManager, SurrealPropertyRepository, SurrealUserRepository};
use inmo_store::LocalPropertyRepository;
use tracing_subscriber::EnvFilter;

mod api;
mod backend;
mod config;

use api::context::{AppState, SessionStore};
use backend::{PropertyBackend, VerifierBackend};
use config::{BackendKind, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("inmo=info".parse()?))
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let (repo, verifier) = match config.backend {
        BackendKind::Surreal => {
            let manager = DbManager::connect(&config.db).await?;
            inmo_db::run_migrations(manager.client()).await?;

            let users = SurrealUserRepository::new(manager.client().clone());
            if let Some(seed) = &config.seed_admin {
                users
                    .upsert_admin(UpsertAdmin {
                        email: seed.email.clone(),
                        name: seed.name.clone(),
                        password: seed.password.clone(),
                    })
                    .await?;
                tracing::info!(email = %seed.email, "Admin account provisioned");
            }

            (
                PropertyBackend::Surreal(SurrealPropertyRepository::new(
                    manager.client().clone(),
                )),
                VerifierBackend::Db(DbCredentialVerifier::new(users)),
            )
        }
        BackendKind::Local => {
            let repo = match &config.store_path {
                Some(path) => LocalPropertyRepository::with_snapshot(path.clone()).await?,
                None => LocalPropertyRepository::with_seed(),
            };
            tracing::info!("Running against the local store with demo credentials");
            (
                PropertyBackend::Local(repo),
                VerifierBackend::Demo(DemoVerifier),
            )
        }
    };

    let state = AppState {
        repo,
        verifier,
        sessions: SessionStore::default(),
    };

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "InmoApp server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
