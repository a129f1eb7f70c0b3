//! Build orchestration for the `tourbuild` binary: text in, artifacts out.
//! The binary itself only handles argument parsing and file I/O.

use nav::NavConfig;

#[derive(Debug)]
pub struct BuildProducts {
    pub node_table: String,
    pub edge_table: String,
    pub tour_json: String,
    pub scene_count: usize,
    pub edge_count: usize,
}

/// Run the full pipeline over already-loaded input text.
///
/// `manual_text` and `blocked_text` are `None` when the override file was
/// absent or unreadable; that is an empty list, not an error.
pub fn build_products(
    manifest_text: &str,
    capture_text: &str,
    manual_text: Option<&str>,
    blocked_text: Option<&str>,
    config: &NavConfig,
) -> Result<BuildProducts, String> {
    let scenes = formats::parse_scene_manifest(manifest_text).map_err(|e| e.to_string())?;
    let capture = formats::parse_capture_settings(capture_text).map_err(|e| e.to_string())?;
    let manual = parse_optional_edges(manual_text)?;
    let blocked = parse_optional_edges(blocked_text)?;

    let positions = nav::dead_reckon(&scenes, config.grid_step_m);
    let graph = nav::build_graph(&scenes, &positions, &manual, &blocked, config);
    let tour = nav::assemble_tour(&scenes, &positions, &graph, &capture, config)
        .map_err(|e| e.to_string())?;

    let edge_count = graph
        .adjacency()
        .values()
        .map(|neighbors| neighbors.len())
        .sum::<usize>()
        / 2;

    Ok(BuildProducts {
        node_table: formats::node_table(&scenes, &positions),
        edge_table: formats::edge_table(&nav::sequential_pairs(&scenes)),
        tour_json: serde_json::to_string_pretty(&tour).map_err(|e| format!("json: {e}"))?,
        scene_count: scenes.len(),
        edge_count,
    })
}

/// Positions-only variant: node and edge tables without a tour.
pub fn build_tables(manifest_text: &str, grid_step_m: f64) -> Result<(String, String), String> {
    let scenes = formats::parse_scene_manifest(manifest_text).map_err(|e| e.to_string())?;
    let positions = nav::dead_reckon(&scenes, grid_step_m);
    Ok((
        formats::node_table(&scenes, &positions),
        formats::edge_table(&nav::sequential_pairs(&scenes)),
    ))
}

fn parse_optional_edges(
    text: Option<&str>,
) -> Result<Vec<(scene::SceneId, scene::SceneId)>, String> {
    match text {
        Some(text) => formats::parse_edge_list(text).map_err(|e| e.to_string()),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use nav::NavConfig;

    use super::{build_products, build_tables};

    const MANIFEST: &str = "\
id,type,floor,section,notes,filename,heading,moveHeading,stepMeters
1,room,1,a,Entrance,entrance.jpg,N,,
2,room,1,a,Hall,hall.jpg,N,,
3,room,1,a,Lab,lab.jpg,E,,
";

    const CAPTURE: &str = r#"{
        "entrance": { "fovDeg": 100.0, "tileSize": 512, "levels": 4 },
        "hall": { "fovDeg": 100.0, "tileSize": 512, "levels": 4 },
        "lab": { "fovDeg": 100.0, "tileSize": 512, "levels": 4 }
    }"#;

    #[test]
    fn build_emits_all_three_artifacts() {
        let products =
            build_products(MANIFEST, CAPTURE, None, None, &NavConfig::default()).expect("build");

        assert_eq!(products.scene_count, 3);
        assert_eq!(products.edge_count, 2);
        assert_eq!(
            products.node_table,
            "id,x,y,headingDeg\n1,0.00,0.00,0\n2,0.00,-5.00,0\n3,0.00,-10.00,90\n"
        );
        assert_eq!(products.edge_table, "from,to\n1,2\n2,3\n");
        assert!(products.tour_json.contains("\"entrance\""));
        assert!(products.tour_json.contains("\"targetYaw\""));
    }

    #[test]
    fn blocked_override_removes_sequential_edge_from_tour() {
        let blocked = "from,to\n1,2\n";
        let products = build_products(MANIFEST, CAPTURE, None, Some(blocked), &NavConfig::default())
            .expect("build");

        assert_eq!(products.edge_count, 1);
        // The persisted edge table is sequential-only by contract and
        // keeps the pair; the tour is where the block takes effect.
        assert_eq!(products.edge_table, "from,to\n1,2\n2,3\n");
        let tour: serde_json::Value = serde_json::from_str(&products.tour_json).unwrap();
        let entrance_hotspots = tour["scenes"]["entrance"]["hotspots"].as_array().unwrap();
        assert!(entrance_hotspots.is_empty());
    }

    #[test]
    fn missing_capture_entry_fails_the_build() {
        let capture = r#"{ "entrance": { "fovDeg": 100.0, "tileSize": 512, "levels": 4 } }"#;
        let err = build_products(MANIFEST, capture, None, None, &NavConfig::default())
            .expect_err("should fail");
        assert!(err.contains("hall"));
    }

    #[test]
    fn tables_only_variant_skips_capture_config() {
        let (nodes, edges) = build_tables(MANIFEST, 5.0).expect("tables");
        assert!(nodes.starts_with("id,x,y,headingDeg\n"));
        assert_eq!(edges, "from,to\n1,2\n2,3\n");
    }
}
