//! Domain model definitions.

pub mod property;
pub mod user;
