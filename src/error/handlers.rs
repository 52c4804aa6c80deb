//! Error handlers
//!
//! Logs authentication errors at a level matching who caused them.

use crate::error::types::{AuthError, Fault};
use log::{error, warn};

/// Log an authentication error
pub fn handle_error(err: &AuthError) {
    match err.fault() {
        Fault::Client => warn!("Rejected authentication request: {}", err),
        Fault::Server => error!("Authentication failed on store access: {}", err),
    }
}
