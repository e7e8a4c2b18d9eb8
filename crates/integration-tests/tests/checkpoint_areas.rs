//! Integration tests for checkpoint area classification against stored
//! area rows.

use marshal_checkin_core::geo::{Point, calculate_checkpoint_areas};
use marshal_checkin_core::models::Location;
use marshal_checkin_core::records::LocationRecord;
use marshal_checkin_core::{AreaId, LocationId};
use marshal_checkin_integration_tests::dublin_10k;

fn default_area() -> AreaId {
    AreaId::new("default")
}

#[test]
fn test_stored_areas_load() {
    let snapshot = dublin_10k();
    assert_eq!(snapshot.areas.len(), 4);

    let river = snapshot
        .areas
        .iter()
        .find(|a| a.id == AreaId::new("river"))
        .expect("river area should load");
    assert!(river.polygon.is_degenerate());

    let default = snapshot
        .areas
        .iter()
        .find(|a| a.is_default)
        .expect("default area should load");
    assert!(default.polygon.is_empty());
}

#[test]
fn test_checkpoint_inside_one_area() {
    let snapshot = dublin_10k();
    assert_eq!(
        snapshot.classify(Point::new(53.355, -6.265), &default_area()),
        vec![AreaId::new("north")]
    );
    assert_eq!(
        snapshot.classify(Point::new(53.345, -6.265), &default_area()),
        vec![AreaId::new("south")]
    );
}

#[test]
fn test_checkpoint_outside_all_areas_gets_default() {
    let snapshot = dublin_10k();
    assert_eq!(
        snapshot.classify(Point::new(53.4, -6.1), &default_area()),
        vec![default_area()]
    );
}

#[test]
fn test_shared_edge_belongs_to_one_side() {
    // North and south share latitude 53.35; the half-open edge rule puts
    // the boundary in exactly one of them.
    let snapshot = dublin_10k();
    assert_eq!(
        snapshot.classify(Point::new(53.35, -6.265), &default_area()),
        vec![AreaId::new("north")]
    );
}

#[test]
fn test_degenerate_area_never_matches() {
    // Directly on the river's two-point line.
    let snapshot = dublin_10k();
    let areas = calculate_checkpoint_areas(Point::new(53.346, -6.265), &snapshot.areas, &default_area());
    assert!(!areas.contains(&AreaId::new("river")));
    assert_eq!(areas, vec![AreaId::new("south")]);
}

#[test]
fn test_stored_locations_match_classification() {
    let snapshot = dublin_10k();
    for location in &snapshot.locations {
        let computed = snapshot.classify(location.position, &default_area());
        let stored: Vec<AreaId> = location.area_ids.iter().cloned().collect();
        assert_eq!(computed, stored, "location {} is misclassified", location.id);
    }
}

#[test]
fn test_reclassify_after_move() {
    let snapshot = dublin_10k();
    let mut location = snapshot
        .location(&LocationId::new("cp-finish"))
        .cloned()
        .expect("cp-finish should exist");

    location.position = Point::new(53.356, -6.26);
    location.reclassify(&snapshot.areas, &default_area());

    assert!(location.is_in_area(&AreaId::new("north")));
    assert!(!location.is_in_area(&default_area()));
}

#[test]
fn test_location_record_roundtrip_keeps_areas() {
    let snapshot = dublin_10k();
    let location = snapshot
        .location(&LocationId::new("cp-park"))
        .expect("cp-park should exist");

    let record = LocationRecord::from(location);
    assert_eq!(record.area_ids_json, r#"["south"]"#);
    assert_eq!(&Location::from(record), location);
}
