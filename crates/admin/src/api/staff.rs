//! Staff collection operations.
//!
//! The staff collection supports one filter: equality on `businessId`.
//! Every list fetch in the dashboard is scoped to a business; there is no
//! unscoped staff listing.

use tracing::instrument;

use venue_admin_core::{BusinessId, StaffId};

use super::{ApiClient, ApiError};
use crate::models::{Staff, StaffPayload};

impl ApiClient {
    /// Fetch the staff of one business (`GET /staff?businessId={id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self), fields(business_id = %business_id))]
    pub async fn list_staff(&self, business_id: &BusinessId) -> Result<Vec<Staff>, ApiError> {
        self.get_with_query("/staff", &[("businessId", business_id.as_str())])
            .await
    }

    /// Fetch a single staff member by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such member exists.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn get_staff(&self, id: StaffId) -> Result<Staff, ApiError> {
        self.get(&format!("/staff/{id}")).await
    }

    /// Create a staff member. The service assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, payload))]
    pub async fn create_staff(&self, payload: &StaffPayload) -> Result<Staff, ApiError> {
        self.post("/staff", payload).await
    }

    /// Replace a staff record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such member exists.
    #[instrument(skip(self, payload), fields(staff_id = %id))]
    pub async fn update_staff(&self, id: StaffId, payload: &StaffPayload) -> Result<Staff, ApiError> {
        self.put(&format!("/staff/{id}"), payload).await
    }

    /// Delete a staff member by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such member exists.
    #[instrument(skip(self), fields(staff_id = %id))]
    pub async fn delete_staff(&self, id: StaffId) -> Result<(), ApiError> {
        self.delete(&format!("/staff/{id}")).await
    }
}
