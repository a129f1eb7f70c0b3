//! Tour emitter: assembles the viewer-facing description.

use std::collections::BTreeMap;

use scene::{CaptureSettings, NavGraph, NodePosition, SceneRecord, Tour, TourScene};

use crate::config::NavConfig;
use crate::hotspot::{initial_yaw_deg, project_hotspots};

#[derive(Debug)]
pub enum TourError {
    MissingCaptureSettings { scene_key: String },
}

impl std::fmt::Display for TourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourError::MissingCaptureSettings { scene_key } => {
                write!(f, "no capture settings for scene {scene_key:?}")
            }
        }
    }
}

impl std::error::Error for TourError {}

/// Build the tour description for the viewer. Every listed scene must have
/// capture settings; a missing entry aborts the build rather than emitting
/// a scene the viewer cannot address tiles for.
pub fn assemble_tour(
    scenes: &[SceneRecord],
    positions: &[NodePosition],
    graph: &NavGraph,
    capture: &BTreeMap<String, CaptureSettings>,
    config: &NavConfig,
) -> Result<Tour, TourError> {
    let mut hotspots_by_id = project_hotspots(scenes, positions, graph, config);

    let mut tour = Tour::default();
    for scene in scenes {
        let settings =
            capture
                .get(&scene.scene_key)
                .ok_or_else(|| TourError::MissingCaptureSettings {
                    scene_key: scene.scene_key.clone(),
                })?;

        tour.scenes.insert(
            scene.scene_key.clone(),
            TourScene {
                title: if scene.title.is_empty() {
                    scene.scene_key.clone()
                } else {
                    scene.title.clone()
                },
                initial_yaw: initial_yaw_deg(scene),
                initial_pitch: 0.0,
                capture: settings.clone(),
                hotspots: hotspots_by_id.remove(&scene.id).unwrap_or_default(),
            },
        );
    }
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use scene::{CaptureSettings, NavGraph, NodePosition, SceneId, SceneRecord};

    use super::{TourError, assemble_tour};
    use crate::config::NavConfig;

    fn scene(id: i64, key: &str, heading: f64, title: &str) -> SceneRecord {
        SceneRecord {
            id: SceneId(id),
            scene_key: key.to_string(),
            heading_deg: heading,
            move_heading_deg: None,
            step_meters: 5.0,
            title: title.to_string(),
        }
    }

    fn settings() -> CaptureSettings {
        CaptureSettings {
            fov_deg: 100.0,
            tile_size: 512,
            levels: 4,
            base_path: None,
        }
    }

    #[test]
    fn emits_one_entry_per_scene_with_hotspots() {
        let scenes = vec![
            scene(1, "hall", 0.0, "Hall"),
            scene(2, "lab", 0.0, ""),
        ];
        let positions = vec![NodePosition::new(0.0, 0.0), NodePosition::new(0.0, -5.0)];
        let mut graph = NavGraph::new();
        graph.insert_bidirectional(SceneId(1), SceneId(2));

        let capture: BTreeMap<_, _> = [
            ("hall".to_string(), settings()),
            ("lab".to_string(), settings()),
        ]
        .into();

        let tour = assemble_tour(&scenes, &positions, &graph, &capture, &NavConfig::default())
            .expect("assemble tour");

        assert_eq!(tour.scenes.len(), 2);
        let hall = &tour.scenes["hall"];
        assert_eq!(hall.title, "Hall");
        assert_eq!(hall.initial_yaw, 0.0);
        assert_eq!(hall.hotspots.len(), 1);
        // A scene with no notes labels its hotspot by scene key.
        assert_eq!(hall.hotspots[0].destination_scene_key, "lab");
        assert_eq!(hall.hotspots[0].label, "lab");
        // An untitled scene falls back to its key for its own title too.
        assert_eq!(tour.scenes["lab"].title, "lab");
    }

    #[test]
    fn missing_capture_settings_is_fatal() {
        let scenes = vec![scene(1, "hall", 0.0, "Hall")];
        let positions = vec![NodePosition::new(0.0, 0.0)];
        let mut graph = NavGraph::new();
        graph.insert_node(SceneId(1));

        let err = assemble_tour(
            &scenes,
            &positions,
            &graph,
            &BTreeMap::new(),
            &NavConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TourError::MissingCaptureSettings { ref scene_key } if scene_key == "hall"
        ));
    }
}
