//! Hotspot projection: turn graph edges into screen-relative directions.

use std::collections::BTreeMap;

use foundation::math::{bearing_deg, normalize_signed_deg};
use scene::{Hotspot, NavGraph, NodePosition, SceneId, SceneRecord};

use crate::bucket::Bucket;
use crate::config::NavConfig;

/// Initial display yaw: every scene opens facing geographic north, however
/// the camera happened to be oriented at capture.
pub fn initial_yaw_deg(scene: &SceneRecord) -> f64 {
    normalize_signed_deg(-scene.heading_deg)
}

/// Compute the hotspot list for every scene in the graph.
///
/// For a directed edge s→t the yaw is the compass bearing made relative to
/// the source scene's capture heading, so the destination appears in the
/// correct on-screen direction. With `snap_hotspot_yaw` on, yaws within
/// bucket tolerance are pinned to exact front/right/back/left centers
/// instead of noisy intermediate angles. The target yaw is the same
/// bearing made relative to the *destination* heading: facing it on
/// arrival keeps the viewer looking along the direction of travel.
pub fn project_hotspots(
    scenes: &[SceneRecord],
    positions: &[NodePosition],
    graph: &NavGraph,
    config: &NavConfig,
) -> BTreeMap<SceneId, Vec<Hotspot>> {
    let index_by_id: BTreeMap<SceneId, usize> = scenes
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    let mut out = BTreeMap::new();
    for (si, s) in scenes.iter().enumerate() {
        let s_pos = positions[si].to_vec2();
        let mut hotspots = Vec::new();

        for neighbor in graph.neighbors(s.id) {
            let Some(&ti) = index_by_id.get(&neighbor) else {
                continue;
            };
            let t = &scenes[ti];
            let bearing = bearing_deg(s_pos, positions[ti].to_vec2());

            let mut yaw = normalize_signed_deg(bearing - s.heading_deg);
            if config.snap_hotspot_yaw {
                if let Some(bucket) = Bucket::classify(yaw, config.bucket_tolerance_deg) {
                    yaw = bucket.center_deg();
                }
            }

            let target_yaw = config
                .emit_target_yaw
                .then(|| normalize_signed_deg(bearing - t.heading_deg));

            hotspots.push(Hotspot {
                destination_scene_key: t.scene_key.clone(),
                label: if t.title.is_empty() {
                    t.scene_key.clone()
                } else {
                    t.title.clone()
                },
                yaw,
                pitch: config.hotspot_pitch_deg,
                target_yaw,
            });
        }

        out.insert(s.id, hotspots);
    }
    out
}
