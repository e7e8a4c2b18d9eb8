//! Geographic areas grouping checkpoints.

use serde::{Deserialize, Serialize};

use crate::geo::Polygon;
use crate::types::{AreaId, EventId};

/// A named zone of an event.
///
/// Area leads are not stored on the area; they come from `EventAreaLead`
/// roles whose area list includes this area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// Unique area ID.
    pub id: AreaId,
    /// Event the area belongs to.
    pub event_id: EventId,
    /// Display name (e.g. "North loop").
    pub name: String,
    /// Boundary; may be empty for areas that have not been drawn yet.
    pub polygon: Polygon,
    /// The fallback area checkpoints land in when no polygon matches.
    pub is_default: bool,
}

impl Area {
    /// Create the fallback area for an event.
    #[must_use]
    pub fn default_for(id: AreaId, event_id: EventId, name: impl Into<String>) -> Self {
        Self {
            id,
            event_id,
            name: name.into(),
            polygon: Polygon::empty(),
            is_default: true,
        }
    }
}
