//! Role and check-in method enums.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown enum value from storage or input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    /// What was being parsed (e.g. "event role").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// A role a person holds within a single event.
///
/// Stored as `EventAdmin` / `EventAreaLead` in the roles table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventRoleKind {
    /// Full access to every marshal in the event.
    EventAdmin,
    /// Oversight of the marshals within specific areas.
    EventAreaLead,
}

impl std::fmt::Display for EventRoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventAdmin => write!(f, "EventAdmin"),
            Self::EventAreaLead => write!(f, "EventAreaLead"),
        }
    }
}

impl std::str::FromStr for EventRoleKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EventAdmin" => Ok(Self::EventAdmin),
            "EventAreaLead" => Ok(Self::EventAreaLead),
            _ => Err(UnknownVariant {
                kind: "event role",
                value: s.to_owned(),
            }),
        }
    }
}

/// How a marshal was checked in at their checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckInMethod {
    /// Marshal checked in from their device with a GPS fix.
    #[serde(rename = "GPS")]
    Gps,
    /// Marshal checked in without location (e.g. no signal).
    Manual,
    /// An admin checked the marshal in on their behalf.
    Admin,
}

impl CheckInMethod {
    /// Whether this method must be backed by a position near the checkpoint.
    #[must_use]
    pub const fn requires_proximity(self) -> bool {
        matches!(self, Self::Gps)
    }
}

impl std::fmt::Display for CheckInMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gps => write!(f, "GPS"),
            Self::Manual => write!(f, "Manual"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

impl std::str::FromStr for CheckInMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gps" => Ok(Self::Gps),
            "manual" => Ok(Self::Manual),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownVariant {
                kind: "check-in method",
                value: s.to_owned(),
            }),
        }
    }
}
