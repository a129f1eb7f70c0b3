//! Planar angle helpers for the tour coordinate frame.
//!
//! The frame is +x east, +y south (increasing `y` walks away from north).
//! Bearings are measured in degrees, clockwise from geographic north.

use super::Vec2;

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Normalize an angle in degrees to `(-180, 180]`.
pub fn normalize_signed_deg(deg: f64) -> f64 {
    let wrapped = normalize_deg(deg);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Compass bearing from `from` to `to`, degrees clockwise from north.
///
/// North is the -y direction, so a step due north has bearing 0 and a step
/// due east has bearing 90.
pub fn bearing_deg(from: Vec2, to: Vec2) -> f64 {
    let d = to - from;
    normalize_deg(d.x.atan2(-d.y).to_degrees())
}

/// Smallest absolute separation between two angles, in `[0, 180]`.
pub fn angular_separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    normalize_signed_deg(a_deg - b_deg).abs()
}
