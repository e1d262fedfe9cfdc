//! InmoApp Store — local in-memory backend for the property
//! repository contract, with optional JSON snapshot persistence and
//! the demo listing catalogue.

pub mod seed;
mod store;

pub use store::LocalPropertyRepository;
