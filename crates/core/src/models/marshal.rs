//! Marshals (event volunteers).

use serde::{Deserialize, Serialize};

use crate::types::{EventId, MarshalId, PersonId};

/// A volunteer registered for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marshal {
    /// Unique marshal ID.
    pub id: MarshalId,
    /// Event the marshal is registered for.
    pub event_id: EventId,
    /// Display name.
    pub name: String,
    /// Linked person, once the marshal has signed in at least once.
    #[serde(default)]
    pub person_id: Option<PersonId>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Marshal {
    /// Create an unlinked marshal without contact details (e.g. from a CSV
    /// import row).
    #[must_use]
    pub fn new(id: MarshalId, event_id: EventId, name: impl Into<String>) -> Self {
        Self {
            id,
            event_id,
            name: name.into(),
            person_id: None,
            email: None,
            phone_number: None,
        }
    }

    /// Whether the marshal record belongs to `person_id`.
    #[must_use]
    pub fn is_person(&self, person_id: &PersonId) -> bool {
        self.person_id.as_ref() == Some(person_id)
    }
}
