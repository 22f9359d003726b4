//! Login against the remote user collection.

use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::models::CurrentUser;

/// Match credentials against the remote user collection.
///
/// Fetches `/users` and scans for an exact email+password match. The
/// comparison is plaintext because that is what the remote collection
/// stores: an inherited weakness of the data service, kept inside this
/// one function.
///
/// Returns `Ok(Some(user))` on a match, `Ok(None)` on a clean miss, and
/// an error only when the collection could not be fetched. A miss has no
/// side effects and carries no detail about which credential was wrong.
///
/// # Errors
///
/// Returns an [`ApiError`] if the user collection cannot be fetched.
#[instrument(skip(api, password), fields(email = %email))]
pub async fn authenticate(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<Option<CurrentUser>, ApiError> {
    let users = api.list_users().await?;

    let found = users
        .into_iter()
        .find(|u| u.email == email && u.password == password);

    Ok(found.map(|u| CurrentUser {
        id: u.id,
        email: u.email,
    }))
}
