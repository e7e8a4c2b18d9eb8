//! Event-scoped role grants.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{AreaId, EventId, EventRoleId, EventRoleKind, PersonId};

/// Grants a person a role within one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRole {
    pub id: EventRoleId,
    pub event_id: EventId,
    pub person_id: PersonId,
    pub role: EventRoleKind,
    /// Areas the role is restricted to. Only meaningful for area leads.
    #[serde(default)]
    pub area_ids: BTreeSet<AreaId>,
}

impl EventRole {
    /// Whether this is an area-lead grant covering `area_id`.
    #[must_use]
    pub fn leads_area(&self, area_id: &AreaId) -> bool {
        self.role == EventRoleKind::EventAreaLead && self.area_ids.contains(area_id)
    }
}
