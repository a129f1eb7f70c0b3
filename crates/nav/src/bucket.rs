use foundation::math::angular_separation_deg;

/// Axis-aligned directional class relative to a scene's capture heading.
///
/// Interior captures have exits roughly along the camera axes, so
/// auto-discovery only accepts neighbors near one of these four centers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Front,
    Right,
    Back,
    Left,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Front, Bucket::Right, Bucket::Back, Bucket::Left];

    /// Bucket center as a signed yaw in (-180, 180].
    pub fn center_deg(self) -> f64 {
        match self {
            Bucket::Front => 0.0,
            Bucket::Right => 90.0,
            Bucket::Back => 180.0,
            Bucket::Left => -90.0,
        }
    }

    /// Geometric opposite, used by the reciprocity check.
    pub fn opposite(self) -> Bucket {
        match self {
            Bucket::Front => Bucket::Back,
            Bucket::Back => Bucket::Front,
            Bucket::Right => Bucket::Left,
            Bucket::Left => Bucket::Right,
        }
    }

    /// Classify a signed yaw into the bucket whose center lies within
    /// `tolerance_deg`, or `None` when the yaw is off-axis everywhere.
    pub fn classify(yaw_deg: f64, tolerance_deg: f64) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .find(|b| angular_separation_deg(yaw_deg, b.center_deg()) <= tolerance_deg)
    }
}
