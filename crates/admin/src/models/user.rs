//! Credential records from the remote user collection.

use serde::Deserialize;

use venue_admin_core::UserId;

/// A record from `GET /users`, consumed only by login.
///
/// The remote service stores the password in the clear; the comparison in
/// [`crate::services::auth`] is equally plain. This is an inherited
/// weakness of the data service, not a recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password: String,
}
