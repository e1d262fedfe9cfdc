//! InmoApp Database — SurrealDB connection management and repository
//! implementations.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - The image-list codec for the serialized-text column ([`images`])
//! - [`SurrealPropertyRepository`] and [`SurrealUserRepository`],
//!   the remote implementations of the `inmo-core` contracts

mod connection;
mod error;
pub mod images;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use repository::{SurrealPropertyRepository, SurrealUserRepository};
pub use schema::run_migrations;
