//! Entity form payloads and validation.
//!
//! Forms deserialize from urlencoded bodies and validate before anything
//! touches the network. Enumerated fields (`type`, `position`) come in
//! through serde, so a value outside the closed set fails extraction
//! before the handler even runs; the validation here covers the
//! required-text fields. Failures re-render the form page with per-field
//! messages and never produce a request to the remote service.

use serde::Deserialize;

use venue_admin_core::{BusinessId, BusinessType, Email, StaffPosition};

use crate::models::{BusinessPayload, StaffPayload};

/// Raw business form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub business_type: BusinessType,
}

/// Per-field validation messages for the business form.
///
/// Empty string means the field is fine; the template renders non-empty
/// messages inline under their inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessFormErrors {
    pub name: String,
    pub location: String,
}

impl BusinessFormErrors {
    /// Whether any field failed validation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.name.is_empty() || !self.location.is_empty()
    }
}

impl BusinessForm {
    /// Validate the submission into a create/update payload.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when a required field is missing.
    pub fn validate(&self) -> Result<BusinessPayload, BusinessFormErrors> {
        let mut errors = BusinessFormErrors::default();

        let name = self.name.trim();
        let location = self.location.trim();

        if name.is_empty() {
            errors.name = "Name is required".to_owned();
        }
        if location.is_empty() {
            errors.location = "Location is required".to_owned();
        }

        if errors.has_errors() {
            return Err(errors);
        }

        Ok(BusinessPayload {
            name: name.to_owned(),
            location: location.to_owned(),
            business_type: self.business_type,
        })
    }
}

/// Raw staff form submission.
///
/// `business_id` rides along as a hidden input so the submission stays
/// tied to the business the list view was scoped to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: StaffPosition,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub business_id: String,
}

/// Per-field validation messages for the staff form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFormErrors {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub business_id: String,
}

impl StaffFormErrors {
    /// Whether any field failed validation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.email.is_empty()
            || !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.business_id.is_empty()
    }
}

impl StaffForm {
    /// Validate the submission into a create/update payload.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when a required field is missing or
    /// the email is not structurally valid.
    pub fn validate(&self) -> Result<StaffPayload, StaffFormErrors> {
        let mut errors = StaffFormErrors::default();

        let email = self.email.trim();
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let phone_number = self.phone_number.trim();
        let business_id = self.business_id.trim();

        if email.is_empty() {
            errors.email = "Email is required".to_owned();
        } else if let Err(e) = Email::parse(email) {
            errors.email = e.to_string();
        }
        if first_name.is_empty() {
            errors.first_name = "First name is required".to_owned();
        }
        if last_name.is_empty() {
            errors.last_name = "Last name is required".to_owned();
        }
        if business_id.is_empty() {
            errors.business_id = "A business must be selected".to_owned();
        }

        if errors.has_errors() {
            return Err(errors);
        }

        Ok(StaffPayload {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            position: self.position,
            phone_number: if phone_number.is_empty() {
                None
            } else {
                Some(phone_number.to_owned())
            },
            business_id: BusinessId::from(business_id),
        })
    }
}
