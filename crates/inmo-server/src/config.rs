//! Server configuration from environment variables.

use std::path::PathBuf;

use anyhow::bail;
use inmo_db::DbConfig;

/// Which property backend to run against. The two are alternate,
/// non-synchronized implementations of the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote SurrealDB, with the database-backed credential verifier.
    Surreal,
    /// Local in-memory/file store, with the demo credential verifier.
    Local,
}

/// Admin provisioning input, applied at startup when
/// `INMO_SEED_ADMIN=1`.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backend: BackendKind,
    pub db: DbConfig,
    /// Snapshot file for the local backend; unset means in-memory
    /// only, seeded with the demo catalogue.
    pub store_path: Option<PathBuf>,
    pub seed_admin: Option<SeedAdmin>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = match std::env::var("INMO_BACKEND").as_deref() {
            Ok("local") => BackendKind::Local,
            Ok("surreal") | Err(_) => BackendKind::Surreal,
            Ok(other) => bail!("unknown INMO_BACKEND '{other}' (expected 'surreal' or 'local')"),
        };

        let seed_admin = match std::env::var("INMO_SEED_ADMIN").as_deref() {
            Ok("1") | Ok("true") => Some(SeedAdmin {
                email: std::env::var("INMO_ADMIN_EMAIL")
                    .unwrap_or_else(|_| "admin@inmoapp.com".into()),
                name: std::env::var("INMO_ADMIN_NAME")
                    .unwrap_or_else(|_| "Admin InmoApp".into()),
                password: std::env::var("INMO_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "admin123".into()),
            }),
            _ => None,
        };

        Ok(Self {
            listen_addr: std::env::var("INMO_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".into()),
            backend,
            db: DbConfig::from_env(),
            store_path: std::env::var("INMO_STORE_PATH").ok().map(PathBuf::from),
            seed_admin,
        })
    }
}
