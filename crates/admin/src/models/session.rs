//! Session-related types for authentication.

use serde::{Deserialize, Serialize};

use venue_admin_core::UserId;

/// Session-stored identity of the logged-in user.
///
/// Only the id and email are persisted; everything else about the user
/// stays in the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
