//! Tour description types.
//!
//! This is the shape of `tour.json`: a mapping from scene key to the
//! display/navigation record the panorama viewer consumes. Everything here
//! is derived data, rebuilt from the manifest on every pipeline run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-scene capture configuration supplied alongside the manifest:
/// field of view plus tiled-image addressing. Looked up by scene key;
/// absence for a listed scene aborts the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureSettings {
    pub fov_deg: f64,
    pub tile_size: u32,
    pub levels: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

/// One navigation hotspot: where on screen it sits and where it leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub destination_scene_key: String,
    pub label: String,
    /// Screen-relative direction, degrees in (-180, 180].
    pub yaw: f64,
    pub pitch: f64,
    /// Yaw the viewer faces on arrival so travel direction is preserved
    /// across the transition. Omitted when the toggle is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_yaw: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourScene {
    pub title: String,
    pub initial_yaw: f64,
    pub initial_pitch: f64,
    #[serde(flatten)]
    pub capture: CaptureSettings,
    pub hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub scenes: BTreeMap<String, TourScene>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CaptureSettings, Hotspot, Tour, TourScene};

    fn sample_tour() -> Tour {
        let mut tour = Tour::default();
        tour.scenes.insert(
            "hall_01".to_string(),
            TourScene {
                title: "Hall".to_string(),
                initial_yaw: -45.0,
                initial_pitch: 0.0,
                capture: CaptureSettings {
                    fov_deg: 100.0,
                    tile_size: 512,
                    levels: 4,
                    base_path: None,
                },
                hotspots: vec![Hotspot {
                    destination_scene_key: "hall_02".to_string(),
                    label: "Hall 2".to_string(),
                    yaw: 90.0,
                    pitch: 0.0,
                    target_yaw: Some(0.0),
                }],
            },
        );
        tour
    }

    #[test]
    fn tour_round_trips_through_json() {
        let tour = sample_tour();
        let payload = serde_json::to_string_pretty(&tour).expect("serialize tour");
        let parsed: Tour = serde_json::from_str(&payload).expect("parse tour");
        assert_eq!(parsed, tour);
    }

    #[test]
    fn serialized_fields_use_viewer_names() {
        let payload = serde_json::to_string(&sample_tour()).expect("serialize tour");
        assert!(payload.contains("\"destinationSceneKey\""));
        assert!(payload.contains("\"targetYaw\""));
        assert!(payload.contains("\"fovDeg\""));
        assert!(payload.contains("\"initialYaw\""));
    }

    #[test]
    fn absent_target_yaw_is_omitted() {
        let mut tour = sample_tour();
        tour.scenes
            .get_mut("hall_01")
            .unwrap()
            .hotspots[0]
            .target_yaw = None;
        let payload = serde_json::to_string(&tour).expect("serialize tour");
        assert!(!payload.contains("targetYaw"));
    }
}
