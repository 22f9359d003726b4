//! User collection operations (login only).

use tracing::instrument;

use super::{ApiClient, ApiError};
use crate::models::UserRecord;

impl ApiClient {
    /// Fetch the full remote user collection.
    ///
    /// Consumed only by [`crate::services::auth::authenticate`], which
    /// scans it for a credential match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get("/users").await
    }
}
