use super::Vec2;

/// Snap a coordinate to the nearest multiple of `step`.
///
/// Ties round away from zero: with step 5, a raw 7.5 snaps to 10 and -7.5
/// snaps to -10 (`f64::round` has exactly this tie behavior).
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Snap both coordinates of a point independently.
pub fn snap_vec2_to_grid(point: Vec2, step: f64) -> Vec2 {
    Vec2::new(snap_to_grid(point.x, step), snap_to_grid(point.y, step))
}
