//! Dry-run check-in against an event snapshot.
//!
//! Applies a check-in to an assignment from the snapshot and prints the
//! updated assignment. The snapshot file is not modified.
//!
//! # Usage
//!
//! ```bash
//! checkin check-in --snapshot event.json --assignment a-1 --lat 53.3498 --lon -6.2603
//! checkin check-in --snapshot event.json --assignment a-1 --method manual
//! ```
//!
//! # Environment Variables
//!
//! - `CHECKIN_RADIUS_METERS` - Maximum GPS distance from the checkpoint (default: 50)

use std::path::Path;

use chrono::Utc;
use marshal_checkin_core::checkin::{CheckInPolicy, CheckInRequest};
use marshal_checkin_core::geo::Point;
use marshal_checkin_core::{AssignmentId, CheckInMethod};

use super::{CommandError, load_snapshot, print_json};

/// Check in `assignment_id` and print the resulting assignment.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the assignment or its
/// checkpoint is missing, or the check-in is rejected.
pub async fn run(
    snapshot_file: &Path,
    assignment_id: &AssignmentId,
    method: CheckInMethod,
    position: Option<Point>,
    policy: CheckInPolicy,
) -> Result<(), CommandError> {
    let snapshot = load_snapshot(snapshot_file).await?;

    let mut assignment = snapshot
        .assignment(assignment_id)
        .cloned()
        .ok_or_else(|| CommandError::NotFound {
            kind: "Assignment",
            id: assignment_id.to_string(),
        })?;
    let location = snapshot
        .location(&assignment.location_id)
        .ok_or_else(|| CommandError::NotFound {
            kind: "Location",
            id: assignment.location_id.to_string(),
        })?;

    let request = CheckInRequest { method, position };
    assignment.check_in(location, request, policy, Utc::now())?;

    print_json(&assignment)
}
