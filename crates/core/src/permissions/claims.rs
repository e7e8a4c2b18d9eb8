//! Request-scoped authorization context.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::EventRole;
use crate::types::{AreaId, EventId, EventRoleKind, MarshalId, PersonId};

/// A role held by the caller, with the areas it is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrant {
    pub role: EventRoleKind,
    #[serde(default)]
    pub area_ids: BTreeSet<AreaId>,
}

/// Who is making the request, for one event.
///
/// Built by the session layer when a person signs in (magic link or code)
/// and discarded after the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    pub person_id: PersonId,
    /// Set when the person is acting as one of the event's marshals.
    #[serde(default)]
    pub marshal_id: Option<MarshalId>,
    /// Event the role grants were issued for.
    pub event_id: EventId,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

impl UserClaims {
    /// Claims for a person with no roles.
    #[must_use]
    pub const fn new(person_id: PersonId, event_id: EventId) -> Self {
        Self {
            person_id,
            marshal_id: None,
            event_id,
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marshal(mut self, marshal_id: MarshalId) -> Self {
        self.marshal_id = Some(marshal_id);
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: EventRoleKind, area_ids: impl IntoIterator<Item = AreaId>) -> Self {
        self.roles.push(RoleGrant {
            role,
            area_ids: area_ids.into_iter().collect(),
        });
        self
    }

    /// Build claims from the person's stored roles for `event_id`.
    ///
    /// Roles for other people or other events are ignored.
    #[must_use]
    pub fn from_event_roles(
        event_id: EventId,
        person_id: PersonId,
        marshal_id: Option<MarshalId>,
        roles: &[EventRole],
    ) -> Self {
        let grants = roles
            .iter()
            .filter(|r| r.event_id == event_id && r.person_id == person_id)
            .map(|r| RoleGrant {
                role: r.role,
                area_ids: r.area_ids.clone(),
            })
            .collect();
        Self {
            person_id,
            marshal_id,
            event_id,
            roles: grants,
        }
    }

    /// Role grants that apply to `event_id`.
    fn grants_for(&self, event_id: &EventId) -> &[RoleGrant] {
        if &self.event_id == event_id {
            &self.roles
        } else {
            tracing::debug!(
                claims_event_id = %self.event_id,
                requested_event_id = %event_id,
                "Ignoring role grants issued for another event"
            );
            &[]
        }
    }

    /// Whether the caller administers `event_id`.
    #[must_use]
    pub fn is_event_admin(&self, event_id: &EventId) -> bool {
        self.grants_for(event_id)
            .iter()
            .any(|g| g.role == EventRoleKind::EventAdmin)
    }

    /// Union of the areas the caller leads in `event_id`.
    #[must_use]
    pub fn lead_area_ids(&self, event_id: &EventId) -> BTreeSet<&AreaId> {
        self.grants_for(event_id)
            .iter()
            .filter(|g| g.role == EventRoleKind::EventAreaLead)
            .flat_map(|g| g.area_ids.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventRoleId;

    fn stored_role(event: &str, person: &str, kind: EventRoleKind, areas: &[&str]) -> EventRole {
        EventRole {
            id: EventRoleId::generate(),
            event_id: EventId::new(event),
            person_id: PersonId::new(person),
            role: kind,
            area_ids: areas.iter().map(|a| AreaId::new(*a)).collect(),
        }
    }

    #[test]
    fn test_from_event_roles_filters_person_and_event() {
        let roles = [
            stored_role("e1", "p1", EventRoleKind::EventAreaLead, &["north"]),
            stored_role("e2", "p1", EventRoleKind::EventAdmin, &[]),
            stored_role("e1", "p2", EventRoleKind::EventAdmin, &[]),
        ];
        let claims = UserClaims::from_event_roles(
            EventId::new("e1"),
            PersonId::new("p1"),
            Some(MarshalId::new("m1")),
            &roles,
        );

        assert_eq!(claims.roles.len(), 1);
        assert!(!claims.is_event_admin(&EventId::new("e1")));
        assert!(claims
            .lead_area_ids(&EventId::new("e1"))
            .contains(&AreaId::new("north")));
    }

    #[test]
    fn test_grants_do_not_apply_to_other_events() {
        let claims = UserClaims::new(PersonId::new("p1"), EventId::new("e1"))
            .with_role(EventRoleKind::EventAdmin, []);

        assert!(claims.is_event_admin(&EventId::new("e1")));
        assert!(!claims.is_event_admin(&EventId::new("e2")));
    }

    #[test]
    fn test_lead_area_ids_union() {
        let event = EventId::new("e1");
        let claims = UserClaims::new(PersonId::new("p1"), event.clone())
            .with_role(EventRoleKind::EventAreaLead, [AreaId::new("a")])
            .with_role(EventRoleKind::EventAreaLead, [AreaId::new("b"), AreaId::new("a")])
            .with_role(EventRoleKind::EventAdmin, [AreaId::new("c")]);

        let areas = claims.lead_area_ids(&event);
        assert_eq!(areas.len(), 2);
        assert!(!areas.contains(&AreaId::new("c")));
    }
}
