//! Dead-reckoning positioner.
//!
//! Walks the ordered scene sequence accumulating displacement. The heading
//! for each step comes from the *previous* scene (its moveHeading, falling
//! back to its capture heading) while the distance comes from the *current*
//! scene's stepMeters. That pairing is intentional and matches how the
//! manifests are surveyed: a row records how far was walked to reach it,
//! while the direction was set when leaving the row before.

use foundation::math::{Vec2, snap_vec2_to_grid};
use scene::{NodePosition, SceneRecord};

/// Compute one grid-snapped position per scene, first scene at the origin.
///
/// Snapping is a post-process over the whole accumulated path. Snapping
/// per step instead would compound rounding error down a long corridor,
/// so the raw accumulator is kept unsnapped until the walk is complete.
pub fn dead_reckon(scenes: &[SceneRecord], grid_step_m: f64) -> Vec<NodePosition> {
    let mut raw: Vec<Vec2> = Vec::with_capacity(scenes.len());
    let mut cursor = Vec2::ZERO;

    for (index, scene) in scenes.iter().enumerate() {
        if index > 0 {
            let theta = scenes[index - 1].travel_heading_deg().to_radians();
            let step = scene.step_meters;
            cursor = cursor + Vec2::new(step * theta.sin(), -step * theta.cos());
        }
        raw.push(cursor);
    }

    raw.into_iter()
        .map(|p| NodePosition::from(snap_vec2_to_grid(p, grid_step_m)))
        .collect()
}
