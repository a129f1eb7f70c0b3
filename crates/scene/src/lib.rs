pub mod graph;
pub mod record;
pub mod tour;

pub use graph::NavGraph;
pub use record::{DEFAULT_STEP_METERS, NodePosition, SceneId, SceneRecord};
pub use tour::{CaptureSettings, Hotspot, Tour, TourScene};
