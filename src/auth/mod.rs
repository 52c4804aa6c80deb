//! Authentication system
//!
//! Validates submitted credentials, dispatches them to the verifier for their
//! type, and resolves the identity they prove.

pub mod registry;
pub mod service;
pub mod validator;
pub mod verifier;

pub use registry::VerifierRegistry;
pub use service::AuthService;
pub use validator::validate_request;
pub use verifier::{CredentialVerifier, UserPassVerifier};
