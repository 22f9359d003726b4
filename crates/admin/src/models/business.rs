//! Business wire types.

use serde::{Deserialize, Serialize};

use venue_admin_core::{BusinessId, BusinessType};

/// A business as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Server-assigned identifier; absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BusinessId>,
    pub name: String,
    pub location: String,
    /// Kind of venue; the remote service may omit it on old records.
    #[serde(rename = "type", default)]
    pub business_type: BusinessType,
}

/// Create/update payload for a business.
///
/// Exactly the three user-editable fields; the id never travels in a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPayload {
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub business_type: BusinessType,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_exactly_three_fields() {
        let payload = BusinessPayload {
            name: "Joe's Bar".to_owned(),
            location: "Main St".to_owned(),
            business_type: BusinessType::Bar,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], "Joe's Bar");
        assert_eq!(object["location"], "Main St");
        assert_eq!(object["type"], "bar");
    }

    #[test]
    fn missing_type_falls_back_to_bar() {
        let business: Business =
            serde_json::from_str(r#"{"id":"1","name":"Old","location":"Side St"}"#).unwrap();
        assert_eq!(business.business_type, BusinessType::Bar);
    }

    #[test]
    fn record_without_id_omits_it_when_serialized() {
        let business = Business {
            id: None,
            name: "New".to_owned(),
            location: "Nowhere".to_owned(),
            business_type: BusinessType::Cafe,
        };
        let value = serde_json::to_value(&business).unwrap();
        assert!(value.get("id").is_none());
    }
}
