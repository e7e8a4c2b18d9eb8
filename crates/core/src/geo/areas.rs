//! Checkpoint area assignment.

use super::point::Point;
use crate::models::Area;
use crate::types::AreaId;

/// Compute which areas a checkpoint at `point` belongs to.
///
/// Every non-default area whose polygon contains the point is returned, in
/// input order; overlapping areas all match. Default areas and areas without
/// a usable polygon are skipped. When nothing matches the result is
/// `[default_area_id]`, so a checkpoint always belongs to at least one area.
#[must_use]
pub fn calculate_checkpoint_areas(
    point: Point,
    areas: &[Area],
    default_area_id: &AreaId,
) -> Vec<AreaId> {
    let matched: Vec<AreaId> = areas
        .iter()
        .filter(|area| !area.is_default)
        .filter(|area| {
            if area.polygon.is_degenerate() {
                tracing::trace!(area_id = %area.id, "Skipping area without a polygon");
                return false;
            }
            area.polygon.contains(point)
        })
        .map(|area| area.id.clone())
        .collect();

    if matched.is_empty() {
        vec![default_area_id.clone()]
    } else {
        matched
    }
}
