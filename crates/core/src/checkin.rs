//! Check-in validation.
//!
//! A marshal checks in at their assigned checkpoint either from their device
//! (GPS, which must be close enough to the checkpoint), manually without a
//! position, or an admin checks them in. The radius comes from configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Point;
use crate::models::Location;
use crate::types::{AssignmentId, CheckInMethod, LocationId};

/// Errors that can occur when checking a marshal in.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CheckInError {
    /// A GPS check-in arrived without coordinates.
    #[error("GPS check-in requires a position")]
    MissingPosition,
    /// The reported position is too far from the checkpoint.
    #[error("position is {distance_meters:.0} m from the checkpoint (limit {radius_meters:.0} m)")]
    OutOfRange {
        /// Distance between the reported position and the checkpoint.
        distance_meters: f64,
        /// Configured check-in radius.
        radius_meters: f64,
    },
    /// The assignment already has check-in state.
    #[error("assignment {0} is already checked in")]
    AlreadyCheckedIn(AssignmentId),
    /// The checkpoint passed in is not the one the marshal is assigned to.
    #[error("assignment is for location {expected}, not {actual}")]
    LocationMismatch {
        expected: LocationId,
        actual: LocationId,
    },
}

/// Check-in state recorded on an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub checked_in_at: DateTime<Utc>,
    pub method: CheckInMethod,
    /// Position captured at check-in; always present for GPS.
    #[serde(default)]
    pub position: Option<Point>,
}

/// An incoming check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInRequest {
    pub method: CheckInMethod,
    pub position: Option<Point>,
}

impl CheckInRequest {
    #[must_use]
    pub const fn gps(position: Point) -> Self {
        Self {
            method: CheckInMethod::Gps,
            position: Some(position),
        }
    }

    #[must_use]
    pub const fn manual() -> Self {
        Self {
            method: CheckInMethod::Manual,
            position: None,
        }
    }

    #[must_use]
    pub const fn admin() -> Self {
        Self {
            method: CheckInMethod::Admin,
            position: None,
        }
    }
}

/// Proximity rules for GPS check-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInPolicy {
    /// Maximum distance from the checkpoint for a GPS check-in.
    pub radius_meters: f64,
}

impl CheckInPolicy {
    #[must_use]
    pub const fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }
}

/// Validate a check-in attempt at `location`.
///
/// # Errors
///
/// - [`CheckInError::MissingPosition`] for GPS without coordinates
/// - [`CheckInError::OutOfRange`] for GPS further than the policy radius
pub fn validate_check_in(
    location: &Location,
    request: CheckInRequest,
    policy: CheckInPolicy,
    now: DateTime<Utc>,
) -> Result<CheckIn, CheckInError> {
    if request.method.requires_proximity() {
        let position = request.position.ok_or(CheckInError::MissingPosition)?;
        let distance_meters = position.distance_meters(&location.position);
        if distance_meters > policy.radius_meters {
            tracing::debug!(
                location_id = %location.id,
                distance_meters,
                radius_meters = policy.radius_meters,
                "Rejected GPS check-in"
            );
            return Err(CheckInError::OutOfRange {
                distance_meters,
                radius_meters: policy.radius_meters,
            });
        }
    }

    Ok(CheckIn {
        checked_in_at: now,
        method: request.method,
        position: request.position,
    })
}
