//! Checkpoints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geo::{Point, calculate_checkpoint_areas};
use crate::models::Area;
use crate::types::{AreaId, EventId, LocationId};

/// A checkpoint along the event route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique location ID.
    pub id: LocationId,
    /// Event the checkpoint belongs to.
    pub event_id: EventId,
    /// Display name (e.g. "Mile 12 water station").
    pub name: String,
    /// Checkpoint coordinates.
    pub position: Point,
    /// Areas containing the checkpoint.
    ///
    /// Computed when the checkpoint is created or moved, not per request.
    pub area_ids: BTreeSet<AreaId>,
}

impl Location {
    /// Create a checkpoint and classify it into `areas`.
    #[must_use]
    pub fn new_with_areas(
        id: LocationId,
        event_id: EventId,
        name: impl Into<String>,
        position: Point,
        areas: &[Area],
        default_area_id: &AreaId,
    ) -> Self {
        let area_ids = calculate_checkpoint_areas(position, areas, default_area_id)
            .into_iter()
            .collect();
        Self {
            id,
            event_id,
            name: name.into(),
            position,
            area_ids,
        }
    }

    /// Recompute area membership, e.g. after the checkpoint moved or an area
    /// boundary was redrawn.
    pub fn reclassify(&mut self, areas: &[Area], default_area_id: &AreaId) {
        self.area_ids = calculate_checkpoint_areas(self.position, areas, default_area_id)
            .into_iter()
            .collect();
    }

    #[must_use]
    pub fn is_in_area(&self, area_id: &AreaId) -> bool {
        self.area_ids.contains(area_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Polygon;

    fn area(id: &str) -> Area {
        Area {
            id: AreaId::new(id),
            event_id: EventId::new("e"),
            name: id.to_string(),
            polygon: Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 0.0),
            ]),
            is_default: false,
        }
    }

    #[test]
    fn test_new_with_areas_classifies() {
        let loc = Location::new_with_areas(
            LocationId::new("cp1"),
            EventId::new("e"),
            "Checkpoint 1",
            Point::new(5.0, 5.0),
            &[area("north")],
            &AreaId::new("default"),
        );
        assert!(loc.is_in_area(&AreaId::new("north")));
        assert!(!loc.is_in_area(&AreaId::new("default")));
    }

    #[test]
    fn test_reclassify_after_move() {
        let areas = [area("north")];
        let default = AreaId::new("default");
        let mut loc = Location::new_with_areas(
            LocationId::new("cp1"),
            EventId::new("e"),
            "Checkpoint 1",
            Point::new(5.0, 5.0),
            &areas,
            &default,
        );

        loc.position = Point::new(50.0, 50.0);
        loc.reclassify(&areas, &default);

        assert_eq!(loc.area_ids.len(), 1);
        assert!(loc.is_in_area(&default));
    }
}
