//! Staged navigation-graph builder.
//!
//! Edge sources combine in a fixed order over one shared adjacency
//! structure: sequential edges, manual overrides, proximity discovery,
//! then blocked-edge subtraction. The subtraction is absolute: a blocked
//! pair disappears no matter which earlier stage introduced it.

use std::collections::BTreeMap;

use foundation::math::{bearing_deg, normalize_signed_deg};
use scene::{NavGraph, NodePosition, SceneId, SceneRecord};

use crate::bucket::Bucket;
use crate::config::NavConfig;

pub struct GraphBuilder<'a> {
    scenes: &'a [SceneRecord],
    positions: &'a [NodePosition],
    index_by_id: BTreeMap<SceneId, usize>,
    graph: NavGraph,
}

impl<'a> GraphBuilder<'a> {
    /// `positions` is parallel to `scenes` (already sorted by id).
    pub fn new(scenes: &'a [SceneRecord], positions: &'a [NodePosition]) -> Self {
        debug_assert_eq!(scenes.len(), positions.len());
        let index_by_id = scenes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        let mut graph = NavGraph::new();
        for scene in scenes {
            graph.insert_node(scene.id);
        }
        Self {
            scenes,
            positions,
            index_by_id,
            graph,
        }
    }

    /// Consecutive scenes in id order are always mutually linked.
    pub fn add_sequential_edges(&mut self) {
        for pair in self.scenes.windows(2) {
            self.graph.insert_bidirectional(pair[0].id, pair[1].id);
        }
    }

    /// Operator-declared pairs. Pairs naming an unknown scene id are
    /// dropped silently; override files are hand-edited.
    pub fn add_manual_edges(&mut self, pairs: &[(SceneId, SceneId)]) {
        for &(from, to) in pairs {
            if self.index_by_id.contains_key(&from) && self.index_by_id.contains_key(&to) {
                self.graph.insert_bidirectional(from, to);
            }
        }
    }

    /// Discover edges between scenes that sit close together and roughly
    /// on-axis relative to the source scene's capture heading.
    ///
    /// Per scene: candidates inside the radius classify into directional
    /// buckets; the nearest candidate wins each bucket; at most
    /// `max_auto_neighbors` winners survive, nearest first. With
    /// reciprocity on, a winner must classify back into the opposite
    /// bucket when viewed from the far end, which filters links that cut
    /// diagonally through walls between corridors.
    pub fn add_proximity_edges(&mut self, config: &NavConfig) {
        for (ai, a) in self.scenes.iter().enumerate() {
            let a_pos = self.positions[ai].to_vec2();

            // Nearest candidate per bucket: (distance, candidate index).
            let mut best: BTreeMap<Bucket, (f64, usize)> = BTreeMap::new();
            for bi in 0..self.scenes.len() {
                if bi == ai {
                    continue;
                }
                let b_pos = self.positions[bi].to_vec2();
                let dist = a_pos.distance(b_pos);
                if dist > config.proximity_radius_m {
                    continue;
                }
                let yaw = normalize_signed_deg(bearing_deg(a_pos, b_pos) - a.heading_deg);
                let Some(bucket) = Bucket::classify(yaw, config.bucket_tolerance_deg) else {
                    continue;
                };
                match best.get(&bucket) {
                    Some(&(held, _)) if held <= dist => {}
                    _ => {
                        best.insert(bucket, (dist, bi));
                    }
                }
            }

            let mut winners: Vec<(f64, usize, Bucket)> = best
                .into_iter()
                .map(|(bucket, (dist, bi))| (dist, bi, bucket))
                .collect();
            winners.sort_by(|x, y| {
                x.0.total_cmp(&y.0)
                    .then_with(|| self.scenes[x.1].id.cmp(&self.scenes[y.1].id))
            });
            winners.truncate(config.max_auto_neighbors);

            for (_, bi, bucket) in winners {
                let b = &self.scenes[bi];
                if config.require_reciprocal {
                    let back_yaw = normalize_signed_deg(
                        bearing_deg(self.positions[bi].to_vec2(), a_pos) - b.heading_deg,
                    );
                    if Bucket::classify(back_yaw, config.bucket_tolerance_deg)
                        != Some(bucket.opposite())
                    {
                        continue;
                    }
                }
                self.graph.insert_bidirectional(a.id, b.id);
            }
        }
    }

    /// Blocked pairs disappear in both directions regardless of which
    /// stage inserted them. Unknown ids are a no-op.
    pub fn remove_blocked_edges(&mut self, pairs: &[(SceneId, SceneId)]) {
        for &(from, to) in pairs {
            self.graph.remove_bidirectional(from, to);
        }
    }

    pub fn finish(self) -> NavGraph {
        self.graph
    }
}

/// The consecutive id pairs, as persisted in `edges.csv`.
pub fn sequential_pairs(scenes: &[SceneRecord]) -> Vec<(SceneId, SceneId)> {
    scenes
        .windows(2)
        .map(|pair| (pair[0].id, pair[1].id))
        .collect()
}

/// Run all four stages in their canonical order.
pub fn build_graph(
    scenes: &[SceneRecord],
    positions: &[NodePosition],
    manual: &[(SceneId, SceneId)],
    blocked: &[(SceneId, SceneId)],
    config: &NavConfig,
) -> NavGraph {
    let mut builder = GraphBuilder::new(scenes, positions);
    builder.add_sequential_edges();
    builder.add_manual_edges(manual);
    builder.add_proximity_edges(config);
    builder.remove_blocked_edges(blocked);
    builder.finish()
}
