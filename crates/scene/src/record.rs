use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Distance walked between consecutive scenes when the manifest row leaves
/// `stepMeters` empty.
pub const DEFAULT_STEP_METERS: f64 = 5.0;

/// Scene identifier: the numeric value of the manifest `id` column.
///
/// Ids are globally unique and their numeric order defines the default
/// sequential traversal through the tour.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SceneId(pub i64);

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One photographed panorama and its navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRecord {
    pub id: SceneId,
    /// Stable identifier derived from the source filename, extension stripped.
    pub scene_key: String,
    /// Camera orientation at capture, degrees clockwise from north.
    pub heading_deg: f64,
    /// Direction of travel for dead-reckoning. `None` means "unspecified"
    /// (fall back to `heading_deg`), which is distinct from due north.
    pub move_heading_deg: Option<f64>,
    /// Distance traveled from the previous scene, meters.
    pub step_meters: f64,
    /// Display label, from the manifest notes column.
    pub title: String,
}

impl SceneRecord {
    /// Heading used when dead-reckoning out of this scene.
    pub fn travel_heading_deg(&self) -> f64 {
        self.move_heading_deg.unwrap_or(self.heading_deg)
    }
}

/// Planar position of a scene: +x east, +y south, meters from the first
/// scene. Computed once by the positioner and immutable afterward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

impl NodePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for NodePosition {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
