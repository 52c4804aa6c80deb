//! Credential shape validation
//!
//! Rejects submissions that are missing their type tag or their data map before
//! anything else looks at them.

use crate::error::AuthError;
use crate::identity::{Credential, CredentialRequest};

/// Turns a submitted request into a [`Credential`].
///
/// An empty type tag counts as missing. An empty data map is a valid shape;
/// whether its keys are sufficient is up to the verifier.
pub fn validate_request(request: &CredentialRequest) -> Result<Credential, AuthError> {
    let credentialtype = match request.credentialtype.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AuthError::InvalidRequest("missing credentialtype".into())),
    };

    let data = request
        .data
        .as_ref()
        .ok_or_else(|| AuthError::InvalidRequest("missing data".into()))?;

    Ok(Credential::new(credentialtype, data.clone()))
}
