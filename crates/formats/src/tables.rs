//! Derived table emitters.
//!
//! `nodes.csv` carries the grid-snapped position and capture heading per
//! scene; `edges.csv` carries the sequential pairs only (manual, proximity
//! and blocked edges live in the tour description, not here).

use scene::{NodePosition, SceneId, SceneRecord};

/// Render the node table. `positions` is parallel to `scenes`.
pub fn node_table(scenes: &[SceneRecord], positions: &[NodePosition]) -> String {
    debug_assert_eq!(scenes.len(), positions.len());
    let mut out = String::from("id,x,y,headingDeg\n");
    for (scene, pos) in scenes.iter().zip(positions) {
        out.push_str(&format!(
            "{},{:.2},{:.2},{}\n",
            scene.id, pos.x, pos.y, scene.heading_deg
        ));
    }
    out
}

/// Render the edge table from sequential pairs.
pub fn edge_table(pairs: &[(SceneId, SceneId)]) -> String {
    let mut out = String::from("from,to\n");
    for (from, to) in pairs {
        out.push_str(&format!("{from},{to}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scene::{NodePosition, SceneId, SceneRecord};

    use super::{edge_table, node_table};

    fn scene(id: i64, heading: f64) -> SceneRecord {
        SceneRecord {
            id: SceneId(id),
            scene_key: format!("scene_{id}"),
            heading_deg: heading,
            move_heading_deg: None,
            step_meters: 5.0,
            title: String::new(),
        }
    }

    #[test]
    fn node_table_uses_fixed_precision() {
        let scenes = vec![scene(1, 0.0), scene(2, 22.5)];
        let positions = vec![NodePosition::new(0.0, 0.0), NodePosition::new(5.0, -10.0)];
        assert_eq!(
            node_table(&scenes, &positions),
            "id,x,y,headingDeg\n1,0.00,0.00,0\n2,5.00,-10.00,22.5\n"
        );
    }

    #[test]
    fn edge_table_lists_pairs() {
        let pairs = vec![(SceneId(1), SceneId(2)), (SceneId(2), SceneId(3))];
        assert_eq!(edge_table(&pairs), "from,to\n1,2\n2,3\n");
    }
}
