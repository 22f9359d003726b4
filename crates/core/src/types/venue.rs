//! Closed enumerations for businesses and staff.
//!
//! Both enumerations are closed sets: the forms render them as `<select>`
//! controls, serde rejects anything outside the set on the wire, and
//! `FromStr` rejects it on the form boundary. The UI never submits a value
//! that is not listed here.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a closed enumeration from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}")]
pub struct EnumParseError {
    /// The enumeration that rejected the value.
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

/// Kind of venue a business is.
///
/// Wire format is the lowercase name, e.g. `"bar"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Bar,
    Restaurant,
    Club,
    Hotel,
    Cafe,
}

impl BusinessType {
    /// Every member of the closed set, in display order.
    pub const ALL: [Self; 5] = [
        Self::Bar,
        Self::Restaurant,
        Self::Club,
        Self::Hotel,
        Self::Cafe,
    ];

    /// The wire representation of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Restaurant => "restaurant",
            Self::Club => "club",
            Self::Hotel => "hotel",
            Self::Cafe => "cafe",
        }
    }
}

impl core::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EnumParseError {
                kind: "business type",
                value: s.to_owned(),
            })
    }
}

/// Position a staff member holds at a business.
///
/// Wire values match the source system: `"kitchen"`, `"service"`, `"PR"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StaffPosition {
    #[serde(rename = "kitchen")]
    Kitchen,
    #[default]
    #[serde(rename = "service")]
    Service,
    #[serde(rename = "PR")]
    Pr,
}

impl StaffPosition {
    /// Every member of the closed set, in display order.
    pub const ALL: [Self; 3] = [Self::Kitchen, Self::Service, Self::Pr];

    /// The wire representation of this position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Service => "service",
            Self::Pr => "PR",
        }
    }
}

impl core::fmt::Display for StaffPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaffPosition {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| EnumParseError {
                kind: "staff position",
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn business_type_wire_format_is_lowercase() {
        let json = serde_json::to_string(&BusinessType::Restaurant).unwrap();
        assert_eq!(json, "\"restaurant\"");

        let parsed: BusinessType = serde_json::from_str("\"cafe\"").unwrap();
        assert_eq!(parsed, BusinessType::Cafe);
    }

    #[test]
    fn staff_position_keeps_the_uppercase_pr_spelling() {
        let json = serde_json::to_string(&StaffPosition::Pr).unwrap();
        assert_eq!(json, "\"PR\"");

        let parsed: StaffPosition = serde_json::from_str("\"PR\"").unwrap();
        assert_eq!(parsed, StaffPosition::Pr);
    }

    #[test]
    fn values_outside_the_closed_set_are_rejected() {
        assert!(serde_json::from_str::<BusinessType>("\"arena\"").is_err());
        assert!(serde_json::from_str::<StaffPosition>("\"pr\"").is_err());
        assert!("arena".parse::<BusinessType>().is_err());
        assert!("manager".parse::<StaffPosition>().is_err());
    }

    #[test]
    fn defaults_match_the_form_defaults() {
        assert_eq!(BusinessType::default(), BusinessType::Bar);
        assert_eq!(StaffPosition::default(), StaffPosition::Service);
    }

    #[test]
    fn from_str_round_trips_every_member() {
        for t in BusinessType::ALL {
            assert_eq!(t.as_str().parse::<BusinessType>().unwrap(), t);
        }
        for p in StaffPosition::ALL {
            assert_eq!(p.as_str().parse::<StaffPosition>().unwrap(), p);
        }
    }
}
