//! InmoApp Auth — password verification, credential verifiers, and
//! the admin access gate.

pub mod error;
pub mod gate;
pub mod password;
pub mod verifier;

pub use error::AuthError;
pub use gate::{GateDecision, RouteClass, classify, decide};
pub use verifier::{AuthenticatedUser, CredentialVerifier, DbCredentialVerifier, DemoVerifier};
