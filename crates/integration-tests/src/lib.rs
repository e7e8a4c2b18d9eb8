//! Integration tests for marshal check-in.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marshal-checkin-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkpoint_areas` - Area classification against stored polygons
//! - `name_import` - CSV name cell expansion
//! - `contact_permissions` - Who can see and edit which marshals
//! - `check_in` - GPS/manual/admin check-in against stored checkpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

use marshal_checkin_core::snapshot::{EventSnapshot, EventSnapshotRecord};

/// Stored rows for a two-area city race.
///
/// - `north` and `south` share the edge at latitude 53.35
/// - `river` has only two vertices and never matches
/// - `p-eve` leads `south`, `p-gus` leads `north`, `p-admin` administers
/// - `p-cat` is an admin of a different event only
/// - `a-bob` is already checked in
pub const DUBLIN_10K: &str = include_str!("../fixtures/dublin_10k.json");

/// Load the [`DUBLIN_10K`] fixture.
///
/// # Panics
///
/// Panics if the fixture is not a valid snapshot export.
#[must_use]
pub fn dublin_10k() -> EventSnapshot {
    let record: EventSnapshotRecord =
        serde_json::from_str(DUBLIN_10K).expect("fixture should be a valid snapshot");
    record.into()
}
