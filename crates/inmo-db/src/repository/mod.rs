//! SurrealDB repository implementations.

mod property;
mod user;

pub use property::SurrealPropertyRepository;
pub use user::SurrealUserRepository;
