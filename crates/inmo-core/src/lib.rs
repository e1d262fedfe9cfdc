//! InmoApp Core — domain models, repository contracts, validation,
//! and the shared error taxonomy.

pub mod error;
pub mod models;
pub mod repository;
pub mod validate;

pub use error::{FieldErrors, InmoError, InmoResult};
