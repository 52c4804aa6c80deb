//! Credential verifiers
//!
//! One verifier per credential type. A verifier names the identity a submission
//! claims and decides whether it matches the credential stored on that identity.

use crate::identity::{Credential, USER_PASS};

pub trait CredentialVerifier: Send + Sync {
    /// Type tag this verifier handles.
    fn credential_type(&self) -> &str;

    /// Id of the identity the submitted credential claims to be, if it names one.
    fn subject<'a>(&self, submitted: &'a Credential) -> Option<&'a str>;

    /// Whether `submitted` proves the identity that owns `stored`.
    fn verify(&self, stored: &Credential, submitted: &Credential) -> bool;
}

/// Username/password verifier.
///
/// Passwords are stored and compared in plain text. A credential without a
/// password matches only another credential without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserPassVerifier;

impl CredentialVerifier for UserPassVerifier {
    fn credential_type(&self) -> &str {
        USER_PASS
    }

    fn subject<'a>(&self, submitted: &'a Credential) -> Option<&'a str> {
        submitted.get("username")
    }

    fn verify(&self, stored: &Credential, submitted: &Credential) -> bool {
        stored.get("password") == submitted.get("password")
    }
}
