//! Integration tests for the user repository using in-memory
//! SurrealDB.

use argon2::{Argon2, PasswordVerifier};
use inmo_core::error::InmoError;
use inmo_core::models::user::{UpsertAdmin, UserRole};
use inmo_core::repository::UserRepository;
use inmo_db::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

async fn setup() -> SurrealUserRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    inmo_db::run_migrations(&db).await.unwrap();
    SurrealUserRepository::new(db)
}

fn admin_input() -> UpsertAdmin {
    UpsertAdmin {
        email: "admin@inmoapp.com".into(),
        name: "Admin InmoApp".into(),
        password: "admin123".into(),
    }
}

fn hash_matches(password: &str, hash: &str) -> bool {
    let parsed = argon2::PasswordHash::new(hash).expect("stored hash must be PHC format");
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[tokio::test]
async fn upsert_creates_account_with_hashed_password() {
    let repo = setup().await;

    let user = repo.upsert_admin(admin_input()).await.unwrap();
    assert_eq!(user.email, "admin@inmoapp.com");
    assert_eq!(user.name, "Admin InmoApp");
    assert_eq!(user.role, UserRole::Admin);
    // Plaintext never persisted.
    assert_ne!(user.password_hash, "admin123");
    assert!(hash_matches("admin123", &user.password_hash));
}

#[tokio::test]
async fn upsert_is_idempotent_keyed_by_email() {
    let repo = setup().await;

    let first = repo.upsert_admin(admin_input()).await.unwrap();
    let second = repo
        .upsert_admin(UpsertAdmin {
            email: "admin@inmoapp.com".into(),
            name: "Admin Renombrado".into(),
            password: "otra-clave".into(),
        })
        .await
        .unwrap();

    // Same account, updated in place.
    assert_eq!(second.id, first.id);
    assert_eq!(second.name, "Admin Renombrado");
    assert!(hash_matches("otra-clave", &second.password_hash));
    assert!(!hash_matches("admin123", &second.password_hash));
}

#[tokio::test]
async fn get_by_email_finds_the_account() {
    let repo = setup().await;
    let created = repo.upsert_admin(admin_input()).await.unwrap();

    let fetched = repo.get_by_email("admin@inmoapp.com").await.unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn get_by_unknown_email_is_not_found() {
    let repo = setup().await;
    let err = repo.get_by_email("nadie@inmoapp.com").await.unwrap_err();
    assert!(matches!(err, InmoError::NotFound { .. }));
}
