//! Marshal-to-checkpoint assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkin::{CheckIn, CheckInError, CheckInPolicy, CheckInRequest, validate_check_in};
use crate::models::Location;
use crate::types::{AssignmentId, EventId, LocationId, MarshalId};

/// Binds a marshal to a checkpoint for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub event_id: EventId,
    pub marshal_id: MarshalId,
    pub location_id: LocationId,
    /// Present once the marshal has checked in.
    #[serde(default)]
    pub check_in: Option<CheckIn>,
}

impl Assignment {
    /// Create a new assignment that has not been checked in.
    #[must_use]
    pub fn new(event_id: EventId, marshal_id: MarshalId, location_id: LocationId) -> Self {
        Self {
            id: AssignmentId::generate(),
            event_id,
            marshal_id,
            location_id,
            check_in: None,
        }
    }

    #[must_use]
    pub const fn is_checked_in(&self) -> bool {
        self.check_in.is_some()
    }

    /// Validate and record a check-in at the assigned checkpoint.
    ///
    /// # Errors
    ///
    /// - [`CheckInError::AlreadyCheckedIn`] if check-in state already exists
    /// - [`CheckInError::LocationMismatch`] if `location` is not the assigned one
    /// - any error from [`validate_check_in`]
    pub fn check_in(
        &mut self,
        location: &Location,
        request: CheckInRequest,
        policy: CheckInPolicy,
        now: DateTime<Utc>,
    ) -> Result<&CheckIn, CheckInError> {
        if self.check_in.is_some() {
            return Err(CheckInError::AlreadyCheckedIn(self.id.clone()));
        }
        if location.id != self.location_id {
            return Err(CheckInError::LocationMismatch {
                expected: self.location_id.clone(),
                actual: location.id.clone(),
            });
        }

        let check_in = validate_check_in(location, request, policy, now)?;
        tracing::info!(
            assignment_id = %self.id,
            marshal_id = %self.marshal_id,
            method = %check_in.method,
            "Marshal checked in"
        );
        Ok(self.check_in.insert(check_in))
    }

    /// Clear check-in state. Returns the previous state, if any.
    pub const fn undo_check_in(&mut self) -> Option<CheckIn> {
        self.check_in.take()
    }
}
