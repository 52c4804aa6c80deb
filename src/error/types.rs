//! Error types
//!
//! Defines the error types raised by the record store and the authentication service.
//! A rejected login is not an error; see [`crate::auth::AuthService::authenticate`].

use std::fmt;
use std::io;

/// Record store errors
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(String),
    DuplicateId(String),
    Corrupt { line: usize, message: String },
    /// Raised by backends outside this crate that cannot serve a request
    /// (e.g. a remote database that is down). The bundled stores never do.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StoreError::DuplicateId(id) => write!(f, "Record already exists: {}", id),
            StoreError::Corrupt { line, message } => {
                write!(f, "Corrupt datafile at line {}: {}", line, message)
            }
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error.to_string())
    }
}

/// Authentication service errors
///
/// Only malformed or unsupported requests and store failures end up here.
#[derive(Debug)]
pub enum AuthError {
    InvalidRequest(String),
    UnsupportedCredentialType(String),
    Store(StoreError),
}

/// Which side of the call is to blame for an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Client,
    Server,
}

impl Fault {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fault::Client => "client",
            Fault::Server => "server",
        }
    }
}

impl AuthError {
    pub fn fault(&self) -> Fault {
        match self {
            AuthError::InvalidRequest(_) | AuthError::UnsupportedCredentialType(_) => {
                Fault::Client
            }
            AuthError::Store(_) => Fault::Server,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidRequest(msg) => write!(f, "Invalid credential: {}", msg),
            AuthError::UnsupportedCredentialType(t) => {
                write!(f, "Unsupported credential type: {}", t)
            }
            AuthError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        AuthError::Store(error)
    }
}
