//! Identity data model
//!
//! Identities, the credentials stored on them, and credentials submitted by callers.

pub mod credential;
pub mod record;

pub use credential::{Credential, CredentialRequest, USER_PASS};
pub use record::Identity;
