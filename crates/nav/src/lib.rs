pub mod bucket;
pub mod builder;
pub mod config;
pub mod hotspot;
pub mod position;
pub mod tour;

pub use bucket::Bucket;
pub use builder::{GraphBuilder, build_graph, sequential_pairs};
pub use config::NavConfig;
pub use hotspot::{initial_yaw_deg, project_hotspots};
pub use position::dead_reckon;
pub use tour::{TourError, assemble_tour};
