//! Checkpoint area classification.
//!
//! # Usage
//!
//! ```bash
//! # Which areas would a checkpoint here belong to?
//! checkin areas --areas areas.json --lat 53.3498 --lon -6.2603
//! ```
//!
//! The areas file is a JSON array of area rows
//! (`id`, `eventId`, `name`, `polygonJson`, `isDefault`).

use std::path::Path;

use marshal_checkin_core::AreaId;
use marshal_checkin_core::geo::{Point, calculate_checkpoint_areas};
use marshal_checkin_core::models::Area;
use marshal_checkin_core::records::AreaRecord;
use tracing::info;

use super::{CommandError, print_json, read_json};

/// Print the areas containing `point`.
///
/// # Errors
///
/// Returns an error if the areas file cannot be read or parsed.
pub async fn classify(
    areas_file: &Path,
    point: Point,
    default_area_id: &AreaId,
) -> Result<(), CommandError> {
    let records: Vec<AreaRecord> = read_json(areas_file).await?;
    let areas: Vec<Area> = records.into_iter().map(Area::from).collect();

    let area_ids = calculate_checkpoint_areas(point, &areas, default_area_id);
    info!(%point, areas = areas.len(), matched = area_ids.len(), "Classified checkpoint");

    print_json(&area_ids)
}
