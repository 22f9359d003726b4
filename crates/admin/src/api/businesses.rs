//! Business collection operations.

use tracing::instrument;

use venue_admin_core::BusinessId;

use super::{ApiClient, ApiError};
use crate::models::{Business, BusinessPayload};

impl ApiClient {
    /// Fetch the full business collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_businesses(&self) -> Result<Vec<Business>, ApiError> {
        self.get("/businesses").await
    }

    /// Fetch a single business by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such business exists.
    #[instrument(skip(self), fields(business_id = %id))]
    pub async fn get_business(&self, id: &BusinessId) -> Result<Business, ApiError> {
        self.get(&format!("/businesses/{id}")).await
    }

    /// Create a business. The service assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, payload))]
    pub async fn create_business(&self, payload: &BusinessPayload) -> Result<Business, ApiError> {
        self.post("/businesses", payload).await
    }

    /// Replace a business record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such business exists.
    #[instrument(skip(self, payload), fields(business_id = %id))]
    pub async fn update_business(
        &self,
        id: &BusinessId,
        payload: &BusinessPayload,
    ) -> Result<Business, ApiError> {
        self.put(&format!("/businesses/{id}"), payload).await
    }

    /// Delete a business by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such business exists.
    #[instrument(skip(self), fields(business_id = %id))]
    pub async fn delete_business(&self, id: &BusinessId) -> Result<(), ApiError> {
        self.delete(&format!("/businesses/{id}")).await
    }
}
