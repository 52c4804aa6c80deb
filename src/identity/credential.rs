//! Credential types
//!
//! A credential is a typed proof artifact: a type tag plus a string map whose
//! required keys depend on the tag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tag of the username/password credential type.
pub const USER_PASS: &str = "UserPass";

/// A validated credential, either stored on an identity or submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub credentialtype: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl Credential {
    pub fn new(credentialtype: impl Into<String>, data: HashMap<String, String>) -> Self {
        Self {
            credentialtype: credentialtype.into(),
            data,
        }
    }

    /// Stored form of a `UserPass` credential. Only the password is kept;
    /// the username is the identity's id.
    pub fn stored_password(password: impl Into<String>) -> Self {
        let mut data = HashMap::new();
        data.insert("password".to_string(), password.into());
        Self::new(USER_PASS, data)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// A credential as submitted by a caller, before shape validation.
///
/// Both fields may be missing; see [`crate::auth::validate_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRequest {
    #[serde(default)]
    pub credentialtype: Option<String>,
    #[serde(default)]
    pub data: Option<HashMap<String, String>>,
}

impl CredentialRequest {
    pub fn new(credentialtype: impl Into<String>, data: HashMap<String, String>) -> Self {
        Self {
            credentialtype: Some(credentialtype.into()),
            data: Some(data),
        }
    }

    /// Builds a `UserPass` submission.
    pub fn user_pass(username: &str, password: &str) -> Self {
        let mut data = HashMap::new();
        data.insert("username".to_string(), username.to_string());
        data.insert("password".to_string(), password.to_string());
        Self::new(USER_PASS, data)
    }
}
