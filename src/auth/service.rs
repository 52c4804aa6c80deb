//! Authentication service
//!
//! Decides whether a submitted credential proves the identity it claims.

use log::debug;

use super::registry::VerifierRegistry;
use super::validator::validate_request;
use crate::error::AuthError;
use crate::identity::{CredentialRequest, Identity};
use crate::store::{Query, RecordStore};

/// Authenticates credentials against an injected identity store.
///
/// The service never writes to the store and keeps no state between calls.
pub struct AuthService<S> {
    store: S,
    registry: VerifierRegistry,
}

impl<S: RecordStore<Identity>> AuthService<S> {
    /// Service supporting the default credential types.
    pub fn new(store: S) -> Self {
        Self::with_registry(store, VerifierRegistry::default())
    }

    pub fn with_registry(store: S, registry: VerifierRegistry) -> Self {
        Self { store, registry }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &VerifierRegistry {
        &self.registry
    }

    /// Authenticates `request`.
    ///
    /// Returns `Ok(Some(identity))` when the credential proves the identity and
    /// `Ok(None)` for an unknown identity, an identity without a credential of
    /// the submitted type, or a secret that does not match.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidRequest`] if the type tag or data map is missing
    /// - [`AuthError::UnsupportedCredentialType`] if no verifier handles the tag;
    ///   the store is not consulted
    /// - [`AuthError::Store`] if the lookup fails
    pub async fn authenticate(
        &self,
        request: &CredentialRequest,
    ) -> Result<Option<Identity>, AuthError> {
        let submitted = validate_request(request)?;

        let verifier = self.registry.get(&submitted.credentialtype).ok_or_else(|| {
            AuthError::UnsupportedCredentialType(submitted.credentialtype.clone())
        })?;

        let Some(subject) = verifier.subject(&submitted) else {
            debug!("{} credential names no identity", submitted.credentialtype);
            return Ok(None);
        };

        let query = Query::where_eq("id", subject);
        let Some(candidate) = self.store.find_one(&query).await? else {
            debug!("No identity matches {}", query);
            return Ok(None);
        };

        let Some(stored) = candidate.credential(&submitted.credentialtype) else {
            debug!(
                "Identity {} has no {} credential",
                candidate.id, submitted.credentialtype
            );
            return Ok(None);
        };

        if verifier.verify(stored, &submitted) {
            debug!("Authenticated identity {}", candidate.id);
            Ok(Some(candidate))
        } else {
            debug!("Credential mismatch for identity {}", candidate.id);
            Ok(None)
        }
    }
}
