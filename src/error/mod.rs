//! Error handling
//!
//! Defines error types and handling for the store and the authentication service.

pub mod handlers;
pub mod types;

pub use types::*;
