//! Per-request event snapshot.
//!
//! Handlers load every collection an operation needs once (one query per
//! table, never per marshal) and then run the pure core functions over the
//! snapshot.

use serde::{Deserialize, Serialize};

use crate::geo::{Point, calculate_checkpoint_areas};
use crate::models::{Area, Assignment, EventRole, Location, Marshal};
use crate::permissions::{ContactPermissions, MarshalContact, UserClaims, get_contact_permissions};
use crate::records::{AreaRecord, EventRoleRecord, LocationRecord};
use crate::types::{AreaId, AssignmentId, EventId, LocationId, MarshalId, PersonId};

/// The stored rows for one event, as read from the table store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshotRecord {
    pub event_id: EventId,
    #[serde(default)]
    pub areas: Vec<AreaRecord>,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub marshals: Vec<Marshal>,
    #[serde(default)]
    pub event_roles: Vec<EventRoleRecord>,
}

/// All of an event's areas, checkpoints, assignments, marshals and roles.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSnapshot {
    pub event_id: EventId,
    pub areas: Vec<Area>,
    pub locations: Vec<Location>,
    pub assignments: Vec<Assignment>,
    pub marshals: Vec<Marshal>,
    pub event_roles: Vec<EventRole>,
}

impl From<EventSnapshotRecord> for EventSnapshot {
    fn from(record: EventSnapshotRecord) -> Self {
        let event_roles = record
            .event_roles
            .into_iter()
            .filter_map(|role_record| {
                let role_id = role_record.id.clone();
                EventRole::try_from(role_record)
                    .inspect_err(|e| {
                        tracing::warn!(role_id = %role_id, error = %e, "Skipping unreadable event role");
                    })
                    .ok()
            })
            .collect();

        Self {
            event_id: record.event_id,
            areas: record.areas.into_iter().map(Area::from).collect(),
            locations: record.locations.into_iter().map(Location::from).collect(),
            assignments: record.assignments,
            marshals: record.marshals,
            event_roles,
        }
    }
}

impl EventSnapshot {
    #[must_use]
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }

    #[must_use]
    pub fn marshal(&self, id: &MarshalId) -> Option<&Marshal> {
        self.marshals.iter().find(|m| &m.id == id)
    }

    #[must_use]
    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.id == id)
    }

    /// Areas a new checkpoint at `point` would belong to.
    #[must_use]
    pub fn classify(&self, point: Point, default_area_id: &AreaId) -> Vec<AreaId> {
        calculate_checkpoint_areas(point, &self.areas, default_area_id)
    }

    /// Claims for `person_id` built from this event's roles.
    ///
    /// When `marshal_id` is not given the person's own marshal record is
    /// used, if they have one.
    #[must_use]
    pub fn claims_for(&self, person_id: PersonId, marshal_id: Option<MarshalId>) -> UserClaims {
        let marshal_id = marshal_id.or_else(|| {
            self.marshals
                .iter()
                .find(|m| m.is_person(&person_id))
                .map(|m| m.id.clone())
        });
        UserClaims::from_event_roles(self.event_id.clone(), person_id, marshal_id, &self.event_roles)
    }

    #[must_use]
    pub fn contact_permissions(&self, claims: &UserClaims) -> ContactPermissions {
        get_contact_permissions(
            claims,
            &self.event_id,
            &self.locations,
            &self.assignments,
            &self.marshals,
            &self.event_roles,
        )
    }

    /// Every marshal in the event as `claims` may see them.
    #[must_use]
    pub fn visible_contacts(&self, claims: &UserClaims) -> Vec<MarshalContact> {
        let permissions = self.contact_permissions(claims);
        self.marshals
            .iter()
            .map(|marshal| permissions.redact(marshal))
            .collect()
    }
}
