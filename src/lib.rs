pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod identity;
pub mod seed;
pub mod store;

pub use auth::AuthService;
pub use error::{AuthError, StoreError};
pub use identity::{Credential, CredentialRequest, Identity};
