//! End-to-end run of the pipeline stages over the three-scene corridor.

use nav::{NavConfig, assemble_tour, build_graph, dead_reckon, sequential_pairs};
use scene::{CaptureSettings, SceneId, SceneRecord};
use std::collections::BTreeMap;

fn corridor_scenes() -> Vec<SceneRecord> {
    // Headings N, N, E; moveHeadings unset; 5 m steps.
    let headings = [0.0, 0.0, 90.0];
    headings
        .iter()
        .enumerate()
        .map(|(i, &heading)| SceneRecord {
            id: SceneId(i as i64 + 1),
            scene_key: format!("pano_{}", i + 1),
            heading_deg: heading,
            move_heading_deg: None,
            step_meters: 5.0,
            title: format!("Scene {}", i + 1),
        })
        .collect()
}

fn capture_for(scenes: &[SceneRecord]) -> BTreeMap<String, CaptureSettings> {
    scenes
        .iter()
        .map(|s| {
            (
                s.scene_key.clone(),
                CaptureSettings {
                    fov_deg: 100.0,
                    tile_size: 512,
                    levels: 4,
                    base_path: Some(format!("tiles/{}", s.scene_key)),
                },
            )
        })
        .collect()
}

#[test]
fn corridor_positions_edges_and_hotspots() {
    let scenes = corridor_scenes();
    let config = NavConfig::default();

    let positions = dead_reckon(&scenes, config.grid_step_m);
    let expected = [(0.0, 0.0), (0.0, -5.0), (0.0, -10.0)];
    for (pos, (x, y)) in positions.iter().zip(expected) {
        assert_eq!((pos.x, pos.y), (x, y));
    }

    assert_eq!(
        sequential_pairs(&scenes),
        vec![(SceneId(1), SceneId(2)), (SceneId(2), SceneId(3))]
    );

    let graph = build_graph(&scenes, &positions, &[], &[], &config);
    assert!(graph.contains_edge(SceneId(1), SceneId(2)));
    assert!(graph.contains_edge(SceneId(2), SceneId(3)));

    let tour = assemble_tour(&scenes, &positions, &graph, &capture_for(&scenes), &config)
        .expect("assemble tour");

    // Scene 3 faces east; its neighbor lies due south, on-screen at 90.
    let toward_2 = &tour.scenes["pano_3"].hotspots[0];
    assert_eq!(toward_2.destination_scene_key, "pano_2");
    assert_eq!(toward_2.yaw, 90.0);

    // Scene 2 faces north and its neighbor 3 is straight ahead.
    let toward_3 = tour.scenes["pano_2"]
        .hotspots
        .iter()
        .find(|h| h.destination_scene_key == "pano_3")
        .expect("hotspot toward scene 3");
    assert_eq!(toward_3.yaw, 0.0);
    // Arriving at the east-facing scene 3, keep looking north.
    assert_eq!(toward_3.target_yaw, Some(-90.0));

    // Every scene opens facing geographic north.
    assert_eq!(tour.scenes["pano_3"].initial_yaw, -90.0);
}

#[test]
fn rebuilding_from_identical_inputs_is_deterministic() {
    let scenes = corridor_scenes();
    let config = NavConfig::default();
    let positions = dead_reckon(&scenes, config.grid_step_m);
    let capture = capture_for(&scenes);

    let graph_a = build_graph(&scenes, &positions, &[], &[], &config);
    let graph_b = build_graph(&scenes, &positions, &[], &[], &config);
    assert_eq!(graph_a, graph_b);

    let tour_a = assemble_tour(&scenes, &positions, &graph_a, &capture, &config).unwrap();
    let tour_b = assemble_tour(&scenes, &positions, &graph_b, &capture, &config).unwrap();
    assert_eq!(tour_a, tour_b);
}
