//! Contact permission resolution.
//!
//! Computes which marshals a caller may see contact details for and edit,
//! from a snapshot of the event loaded once per request. Nothing here does
//! I/O or caches between calls.

use std::collections::{BTreeSet, HashMap};

use tracing::instrument;

use super::ContactPermissions;
use super::claims::UserClaims;
use crate::models::{Assignment, EventRole, Location, Marshal};
use crate::types::{AreaId, EventId, LocationId, MarshalId, PersonId};

/// Resolve the caller's contact permissions for `event_id`.
///
/// Rules:
///
/// 1. An `EventAdmin` can view and modify everyone; nothing else is
///    evaluated.
/// 2. A caller acting as a marshal can view and modify themselves, and can
///    view (not modify) the area leads of every area their checkpoints are
///    in.
/// 3. An `EventAreaLead` can view (not modify) every marshal assigned to a
///    checkpoint in the areas they lead, and themselves.
///
/// Rules 2 and 3 accumulate. Area leads never gain modify rights from the
/// lead role alone. Locations, assignments, marshals and roles belonging to
/// any other event are ignored.
#[must_use]
#[instrument(skip_all, fields(event_id = %event_id))]
pub fn get_contact_permissions(
    claims: &UserClaims,
    event_id: &EventId,
    locations: &[Location],
    assignments: &[Assignment],
    marshals: &[Marshal],
    event_roles: &[EventRole],
) -> ContactPermissions {
    if claims.is_event_admin(event_id) {
        tracing::debug!(person_id = %claims.person_id, "Event admin, full contact access");
        return ContactPermissions::all();
    }

    let location_areas: HashMap<&LocationId, &BTreeSet<AreaId>> = locations
        .iter()
        .filter(|location| &location.event_id == event_id)
        .map(|location| (&location.id, &location.area_ids))
        .collect();
    let assignments: Vec<&Assignment> = assignments
        .iter()
        .filter(|assignment| &assignment.event_id == event_id)
        .collect();
    let mut permissions = ContactPermissions::none();

    if let Some(me) = &claims.marshal_id {
        permissions.viewable_marshal_ids.insert(me.clone());
        permissions.modifiable_marshal_ids.insert(me.clone());

        let my_areas: BTreeSet<&AreaId> = assignments
            .iter()
            .filter(|assignment| &assignment.marshal_id == me)
            .filter_map(|assignment| location_areas.get(&assignment.location_id))
            .flat_map(|areas| areas.iter())
            .collect();

        permissions
            .viewable_marshal_ids
            .extend(lead_marshals_for_areas(&my_areas, event_id, marshals, event_roles));
    }

    let lead_areas = claims.lead_area_ids(event_id);
    if !lead_areas.is_empty() {
        if let Some(me) = &claims.marshal_id {
            permissions.viewable_marshal_ids.insert(me.clone());
        }

        let in_led_area = |location_id: &LocationId| {
            location_areas
                .get(location_id)
                .is_some_and(|areas| areas.iter().any(|area| lead_areas.contains(area)))
        };
        permissions.viewable_marshal_ids.extend(
            assignments
                .iter()
                .filter(|assignment| in_led_area(&assignment.location_id))
                .map(|assignment| assignment.marshal_id.clone()),
        );
    }

    tracing::debug!(
        person_id = %claims.person_id,
        viewable = permissions.viewable_marshal_ids.len(),
        modifiable = permissions.modifiable_marshal_ids.len(),
        "Resolved contact permissions"
    );
    permissions
}

/// Marshal IDs of the area leads for `area_id`.
///
/// A lead is a person with an `EventAreaLead` role covering the area,
/// resolved to the marshal record(s) linked to that person. Leads without a
/// marshal record are skipped.
#[must_use]
pub fn area_lead_marshals(
    area_id: &AreaId,
    event_id: &EventId,
    marshals: &[Marshal],
    event_roles: &[EventRole],
) -> BTreeSet<MarshalId> {
    let areas = BTreeSet::from([area_id]);
    lead_marshals_for_areas(&areas, event_id, marshals, event_roles)
}

fn lead_marshals_for_areas(
    areas: &BTreeSet<&AreaId>,
    event_id: &EventId,
    marshals: &[Marshal],
    event_roles: &[EventRole],
) -> BTreeSet<MarshalId> {
    if areas.is_empty() {
        return BTreeSet::new();
    }

    let lead_people: BTreeSet<&PersonId> = event_roles
        .iter()
        .filter(|role| &role.event_id == event_id)
        .filter(|role| areas.iter().any(|area| role.leads_area(area)))
        .map(|role| &role.person_id)
        .collect();

    marshals
        .iter()
        .filter(|marshal| &marshal.event_id == event_id)
        .filter(|marshal| {
            marshal
                .person_id
                .as_ref()
                .is_some_and(|person| lead_people.contains(person))
        })
        .map(|marshal| marshal.id.clone())
        .collect()
}
