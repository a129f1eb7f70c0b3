//! Direction-marker state for the current scene.
//!
//! The animated 3-D mesh and its trail live in the viewer; this is the
//! state that drives them: which exit directions exist, whether the marker
//! shows at all, and which exit to aim at for a given facing.

use foundation::math::angular_separation_deg;
use scene::TourScene;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionMarker {
    yaws: Vec<f64>,
}

impl DirectionMarker {
    pub fn for_scene(scene: &TourScene) -> Self {
        Self {
            yaws: scene.hotspots.iter().map(|h| h.yaw).collect(),
        }
    }

    /// A scene with no accepted neighbors simply hides the marker.
    pub fn visible(&self) -> bool {
        !self.yaws.is_empty()
    }

    pub fn exit_yaws(&self) -> &[f64] {
        &self.yaws
    }

    /// The exit yaw closest to the direction the viewer currently faces.
    pub fn nearest_exit_yaw(&self, facing_deg: f64) -> Option<f64> {
        self.yaws
            .iter()
            .copied()
            .min_by(|a, b| {
                angular_separation_deg(*a, facing_deg)
                    .total_cmp(&angular_separation_deg(*b, facing_deg))
            })
    }
}

#[cfg(test)]
mod tests {
    use scene::{CaptureSettings, Hotspot, TourScene};

    use super::DirectionMarker;

    fn scene_with_yaws(yaws: &[f64]) -> TourScene {
        TourScene {
            title: "Hall".to_string(),
            initial_yaw: 0.0,
            initial_pitch: 0.0,
            capture: CaptureSettings {
                fov_deg: 100.0,
                tile_size: 512,
                levels: 4,
                base_path: None,
            },
            hotspots: yaws
                .iter()
                .map(|&yaw| Hotspot {
                    destination_scene_key: "next".to_string(),
                    label: "Next".to_string(),
                    yaw,
                    pitch: 0.0,
                    target_yaw: None,
                })
                .collect(),
        }
    }

    #[test]
    fn hidden_when_scene_has_no_hotspots() {
        let marker = DirectionMarker::for_scene(&scene_with_yaws(&[]));
        assert!(!marker.visible());
        assert_eq!(marker.nearest_exit_yaw(0.0), None);
    }

    #[test]
    fn picks_exit_nearest_to_facing() {
        let marker = DirectionMarker::for_scene(&scene_with_yaws(&[0.0, 90.0, 180.0]));
        assert!(marker.visible());
        assert_eq!(marker.nearest_exit_yaw(10.0), Some(0.0));
        assert_eq!(marker.nearest_exit_yaw(100.0), Some(90.0));
        // Wraparound: facing -170 is closest to the back exit at 180.
        assert_eq!(marker.nearest_exit_yaw(-170.0), Some(180.0));
    }
}
