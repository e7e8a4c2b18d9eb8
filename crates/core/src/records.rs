//! Persisted record shapes.
//!
//! The table store keeps list-valued fields as JSON text columns
//! (`PolygonJson`, `AreaIdsJson`). These records mirror those rows; the
//! conversions below are the only place that JSON is read or written. A
//! column that fails to parse is treated as empty rather than failing the
//! whole row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geo::{Point, Polygon};
use crate::models::{Area, EventRole, Location};
use crate::types::{
    AreaId, EventId, EventRoleId, EventRoleKind, LocationId, PersonId, UnknownVariant,
};

/// Errors that can occur converting a record into its domain type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The stored role name is not one we know.
    #[error("unknown role: {0}")]
    UnknownRole(#[from] UnknownVariant),
}

/// An `Areas` table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRecord {
    pub id: AreaId,
    pub event_id: EventId,
    pub name: String,
    #[serde(default)]
    pub polygon_json: String,
    #[serde(default)]
    pub is_default: bool,
}

impl From<AreaRecord> for Area {
    fn from(record: AreaRecord) -> Self {
        let polygon = Polygon::parse_json(&record.polygon_json).unwrap_or_else(|e| {
            tracing::debug!(area_id = %record.id, error = %e, "Area polygon unreadable, treating as empty");
            Polygon::empty()
        });
        Self {
            id: record.id,
            event_id: record.event_id,
            name: record.name,
            polygon,
            is_default: record.is_default,
        }
    }
}

impl From<&Area> for AreaRecord {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id.clone(),
            event_id: area.event_id.clone(),
            name: area.name.clone(),
            polygon_json: area.polygon.to_json(),
            is_default: area.is_default,
        }
    }
}

/// A `Locations` table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: LocationId,
    pub event_id: EventId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub area_ids_json: String,
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        let area_ids = parse_area_ids(&record.area_ids_json);
        Self {
            id: record.id,
            event_id: record.event_id,
            name: record.name,
            position: Point::new(record.latitude, record.longitude),
            area_ids,
        }
    }
}

impl From<&Location> for LocationRecord {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            event_id: location.event_id.clone(),
            name: location.name.clone(),
            latitude: location.position.latitude,
            longitude: location.position.longitude,
            area_ids_json: area_ids_to_json(&location.area_ids),
        }
    }
}

/// An `EventRoles` table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRoleRecord {
    pub id: EventRoleId,
    pub event_id: EventId,
    pub person_id: PersonId,
    pub role: String,
    #[serde(default)]
    pub area_ids_json: String,
}

impl TryFrom<EventRoleRecord> for EventRole {
    type Error = RecordError;

    fn try_from(record: EventRoleRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse::<EventRoleKind>()?;
        Ok(Self {
            id: record.id,
            event_id: record.event_id,
            person_id: record.person_id,
            role,
            area_ids: parse_area_ids(&record.area_ids_json),
        })
    }
}

impl From<&EventRole> for EventRoleRecord {
    fn from(role: &EventRole) -> Self {
        Self {
            id: role.id.clone(),
            event_id: role.event_id.clone(),
            person_id: role.person_id.clone(),
            role: role.role.to_string(),
            area_ids_json: area_ids_to_json(&role.area_ids),
        }
    }
}

/// Decode an `AreaIdsJson` column. Blank or unreadable text is an empty set.
#[must_use]
pub fn parse_area_ids(json: &str) -> BTreeSet<AreaId> {
    if json.trim().is_empty() {
        return BTreeSet::new();
    }
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Area ID list unreadable, treating as empty");
        BTreeSet::new()
    })
}

/// Encode an `AreaIdsJson` column.
#[must_use]
pub fn area_ids_to_json(area_ids: &BTreeSet<AreaId>) -> String {
    serde_json::to_string(area_ids).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_area_record_with_polygon() {
        let record = AreaRecord {
            id: AreaId::new("north"),
            event_id: EventId::new("e"),
            name: "North".to_string(),
            polygon_json: r#"[{"latitude":0,"longitude":0},{"latitude":0,"longitude":1},{"latitude":1,"longitude":1}]"#
                .to_string(),
            is_default: false,
        };
        let area = Area::from(record);
        assert_eq!(area.polygon.vertices().len(), 3);
    }

    #[test]
    fn test_area_record_with_bad_polygon_is_empty() {
        let record = AreaRecord {
            id: AreaId::new("north"),
            event_id: EventId::new("e"),
            name: "North".to_string(),
            polygon_json: "{oops".to_string(),
            is_default: false,
        };
        assert!(Area::from(record).polygon.is_empty());
    }

    #[test]
    fn test_area_record_roundtrip() {
        let area = Area {
            id: AreaId::new("south"),
            event_id: EventId::new("e"),
            name: "South".to_string(),
            polygon: Polygon::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]),
            is_default: false,
        };
        assert_eq!(Area::from(AreaRecord::from(&area)), area);
    }

    #[test]
    fn test_location_record_area_ids() {
        let record = LocationRecord {
            id: LocationId::new("cp1"),
            event_id: EventId::new("e"),
            name: "Start".to_string(),
            latitude: 53.3,
            longitude: -6.2,
            area_ids_json: r#"["north","south"]"#.to_string(),
        };
        let location = Location::from(record.clone());
        assert!(location.is_in_area(&AreaId::new("north")));
        assert!(location.is_in_area(&AreaId::new("south")));
        assert_eq!(LocationRecord::from(&location), record);
    }

    #[test]
    fn test_location_record_blank_and_bad_area_ids() {
        assert!(parse_area_ids("").is_empty());
        assert!(parse_area_ids("[]").is_empty());
        assert!(parse_area_ids("north").is_empty());
    }

    #[test]
    fn test_event_role_record() {
        let record = EventRoleRecord {
            id: EventRoleId::new("r1"),
            event_id: EventId::new("e"),
            person_id: PersonId::new("p1"),
            role: "EventAreaLead".to_string(),
            area_ids_json: r#"["north"]"#.to_string(),
        };
        let role = EventRole::try_from(record).unwrap();
        assert_eq!(role.role, EventRoleKind::EventAreaLead);
        assert!(role.leads_area(&AreaId::new("north")));
    }

    #[test]
    fn test_event_role_record_unknown_role() {
        let record = EventRoleRecord {
            id: EventRoleId::new("r1"),
            event_id: EventId::new("e"),
            person_id: PersonId::new("p1"),
            role: "Caterer".to_string(),
            area_ids_json: String::new(),
        };
        let err = EventRole::try_from(record).unwrap_err();
        assert_eq!(err.to_string(), "unknown role: invalid event role: Caterer");
    }

    #[test]
    fn test_record_json_is_camel_case() {
        let json = r#"{"id":"a","eventId":"e","name":"A","polygonJson":"[]","isDefault":true}"#;
        let record: AreaRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_default);
    }
}
