//! Staff wire types.
//!
//! Field names on the wire are camelCase, matching the remote service's
//! collections (`firstName`, `businessId`, ...).

use serde::{Deserialize, Serialize};

use venue_admin_core::{BusinessId, StaffId, StaffPosition};

/// A staff member as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Server-assigned identifier; absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StaffId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub position: StaffPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// The business this member belongs to. Referential integrity is the
    /// remote service's job; the dashboard just carries the value through.
    pub business_id: BusinessId,
}

impl Staff {
    /// Display name used by the list view ("First Last").
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update payload for a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub position: StaffPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub business_id: BusinessId,
}
