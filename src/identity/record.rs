//! Module `identity`
//!
//! Defines the `Identity` record: a registered principal with its typed credentials.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::credential::Credential;
use crate::store::Record;

/// A registered principal.
///
/// Credentials are keyed by their type tag, so an identity holds at most one
/// credential per type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub credentials: HashMap<String, Credential>,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            token: None,
            credentials: HashMap::new(),
        }
    }

    /// Attaches `credential` under its own type tag, replacing any previous
    /// credential of that type.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credentials
            .insert(credential.credentialtype.clone(), credential);
        self
    }

    /// Returns the stored credential of the given type, if any.
    pub fn credential(&self, credentialtype: &str) -> Option<&Credential> {
        self.credentials.get(credentialtype)
    }
}

impl Record for Identity {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "token" => self.token.as_deref(),
            _ => None,
        }
    }
}
