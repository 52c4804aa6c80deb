//! Verifier registry
//!
//! Maps credential type tags to their verifiers. Supporting a new credential
//! type means registering a verifier for it.

use std::collections::HashMap;

use super::verifier::{CredentialVerifier, UserPassVerifier};

pub struct VerifierRegistry {
    verifiers: HashMap<String, Box<dyn CredentialVerifier>>,
}

impl VerifierRegistry {
    /// Registry with no supported types.
    pub fn empty() -> Self {
        Self {
            verifiers: HashMap::new(),
        }
    }

    /// Registers `verifier` under its type tag, returning the verifier it replaced.
    pub fn register<V>(&mut self, verifier: V) -> Option<Box<dyn CredentialVerifier>>
    where
        V: CredentialVerifier + 'static,
    {
        let tag = verifier.credential_type().to_string();
        self.verifiers.insert(tag, Box::new(verifier))
    }

    pub fn get(&self, credentialtype: &str) -> Option<&dyn CredentialVerifier> {
        self.verifiers.get(credentialtype).map(|v| v.as_ref())
    }

    pub fn supports(&self, credentialtype: &str) -> bool {
        self.verifiers.contains_key(credentialtype)
    }

    /// Supported type tags, sorted.
    pub fn credential_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.verifiers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for VerifierRegistry {
    /// Registry supporting `UserPass` only.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(UserPassVerifier);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Credential;

    struct ApiKeyVerifier;

    impl CredentialVerifier for ApiKeyVerifier {
        fn credential_type(&self) -> &str {
            "ApiKey"
        }

        fn subject<'a>(&self, submitted: &'a Credential) -> Option<&'a str> {
            submitted.get("owner")
        }

        fn verify(&self, stored: &Credential, submitted: &Credential) -> bool {
            stored.get("key").is_some() && stored.get("key") == submitted.get("key")
        }
    }

    #[test]
    fn test_default_supports_only_user_pass() {
        let registry = VerifierRegistry::default();
        assert_eq!(registry.credential_types(), vec!["UserPass"]);
        assert!(registry.supports("UserPass"));
        assert!(!registry.supports("userpass"));
        assert!(registry.get("X509").is_none());
    }

    #[test]
    fn test_register_adds_type() {
        let mut registry = VerifierRegistry::default();
        assert!(registry.register(ApiKeyVerifier).is_none());
        assert_eq!(registry.credential_types(), vec!["ApiKey", "UserPass"]);
        assert_eq!(
            registry.get("ApiKey").map(|v| v.credential_type()),
            Some("ApiKey")
        );
    }

    #[test]
    fn test_register_replaces_same_type() {
        let mut registry = VerifierRegistry::default();
        let previous = registry.register(UserPassVerifier);
        assert!(previous.is_some());
        assert_eq!(registry.credential_types().len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = VerifierRegistry::empty();
        assert!(registry.credential_types().is_empty());
        assert!(!registry.supports("UserPass"));
    }
}
