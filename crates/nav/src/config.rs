/// Toggles and constants for the one configurable pipeline. The richer
/// feature set (reciprocity, blocked edges, targetYaw) is the default;
/// the simpler legacy behavior is reached by flipping toggles off, never
/// by a second code path.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    /// Grid step for the post-walk coordinate snap, meters.
    pub grid_step_m: f64,
    /// Search radius for proximity edge discovery, meters.
    pub proximity_radius_m: f64,
    /// How far off a bucket center (front/right/back/left) a candidate may
    /// sit and still classify. Must stay below 45 so buckets cannot overlap.
    pub bucket_tolerance_deg: f64,
    /// Cap on accepted proximity winners per scene.
    pub max_auto_neighbors: usize,
    /// Require the bucket seen from the far end to be the geometric
    /// opposite before accepting a proximity edge.
    pub require_reciprocal: bool,
    /// Emit the arrival yaw so the viewer keeps facing the travel
    /// direction after a transition.
    pub emit_target_yaw: bool,
    /// Cosmetically snap hotspot yaws onto exact bucket centers.
    pub snap_hotspot_yaw: bool,
    /// Pitch applied to every emitted hotspot.
    pub hotspot_pitch_deg: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            grid_step_m: 5.0,
            proximity_radius_m: 10.0,
            bucket_tolerance_deg: 30.0,
            max_auto_neighbors: 4,
            require_reciprocal: true,
            emit_target_yaw: true,
            snap_hotspot_yaw: false,
            hotspot_pitch_deg: 0.0,
        }
    }
}
