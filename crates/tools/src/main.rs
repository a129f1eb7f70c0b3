use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use nav::NavConfig;
use tools::{build_products, build_tables};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "build" => cmd_build(args),
        "nodes" => cmd_nodes(args),
        _ => Err(usage()),
    }
}

fn cmd_build(args: Vec<String>) -> Result<(), String> {
    // tourbuild build <manifest.csv> <capture.json> <out_dir> [flags]
    if args.len() < 3 {
        return Err(usage());
    }

    let manifest_path = PathBuf::from(&args[0]);
    let capture_path = PathBuf::from(&args[1]);
    let out_dir = PathBuf::from(&args[2]);

    let mut manual_path: Option<PathBuf> = None;
    let mut blocked_path: Option<PathBuf> = None;
    let mut config = NavConfig::default();

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--edges" => {
                manual_path = Some(PathBuf::from(flag_value(&args, &mut i, "--edges")?));
            }
            "--blocked" => {
                blocked_path = Some(PathBuf::from(flag_value(&args, &mut i, "--blocked")?));
            }
            "--grid-step" => {
                config.grid_step_m = parse_f64_flag(&args, &mut i, "--grid-step")?;
            }
            "--radius" => {
                config.proximity_radius_m = parse_f64_flag(&args, &mut i, "--radius")?;
            }
            "--tolerance" => {
                config.bucket_tolerance_deg = parse_f64_flag(&args, &mut i, "--tolerance")?;
            }
            "--max-auto" => {
                config.max_auto_neighbors = flag_value(&args, &mut i, "--max-auto")?
                    .parse::<usize>()
                    .map_err(|_| "--max-auto must be an integer".to_string())?;
            }
            "--no-reciprocity" => {
                config.require_reciprocal = false;
            }
            "--no-target-yaw" => {
                config.emit_target_yaw = false;
            }
            "--snap-yaw" => {
                config.snap_hotspot_yaw = true;
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let manifest_text = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("read {manifest_path:?}: {e}"))?;
    let capture_text =
        fs::read_to_string(&capture_path).map_err(|e| format!("read {capture_path:?}: {e}"))?;

    // Override files are optional: an unreadable file means "no overrides".
    let manual_text = manual_path.as_deref().and_then(read_optional);
    let blocked_text = blocked_path.as_deref().and_then(read_optional);

    let products = build_products(
        &manifest_text,
        &capture_text,
        manual_text.as_deref(),
        blocked_text.as_deref(),
        &config,
    )?;

    fs::create_dir_all(&out_dir).map_err(|e| format!("create {out_dir:?}: {e}"))?;
    write_artifact(&out_dir.join("nodes.csv"), &products.node_table)?;
    write_artifact(&out_dir.join("edges.csv"), &products.edge_table)?;
    write_artifact(&out_dir.join("tour.json"), &products.tour_json)?;

    eprintln!(
        "wrote {} ({} scenes, {} nav edges)",
        out_dir.display(),
        products.scene_count,
        products.edge_count
    );
    Ok(())
}

fn cmd_nodes(args: Vec<String>) -> Result<(), String> {
    // tourbuild nodes <manifest.csv> <out_dir> [--grid-step N]
    if args.len() < 2 {
        return Err(usage());
    }

    let manifest_path = PathBuf::from(&args[0]);
    let out_dir = PathBuf::from(&args[1]);
    let mut grid_step_m = NavConfig::default().grid_step_m;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--grid-step" => {
                grid_step_m = parse_f64_flag(&args, &mut i, "--grid-step")?;
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let manifest_text = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("read {manifest_path:?}: {e}"))?;
    let (node_table, edge_table) = build_tables(&manifest_text, grid_step_m)?;

    fs::create_dir_all(&out_dir).map_err(|e| format!("create {out_dir:?}: {e}"))?;
    write_artifact(&out_dir.join("nodes.csv"), &node_table)?;
    write_artifact(&out_dir.join("edges.csv"), &edge_table)?;

    eprintln!("wrote {}", out_dir.display());
    Ok(())
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_f64_flag(args: &[String], i: &mut usize, flag: &str) -> Result<f64, String> {
    flag_value(args, i, flag)?
        .parse::<f64>()
        .map_err(|_| format!("{flag} must be a number"))
}

fn read_optional(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn write_artifact(path: &Path, payload: &str) -> Result<(), String> {
    fs::write(path, payload).map_err(|e| format!("write {path:?}: {e}"))
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "tourbuild".to_string());
    format!(
        "Usage:\n  {exe} build <manifest.csv> <capture.json> <out_dir> [--edges FILE] [--blocked FILE] [--grid-step N] [--radius N] [--tolerance N] [--max-auto N] [--no-reciprocity] [--no-target-yaw] [--snap-yaw]\n  {exe} nodes <manifest.csv> <out_dir> [--grid-step N]\n\nNotes:\n- The manifest columns are id,type,floor,section,notes,filename,heading,moveHeading,stepMeters.\n- Headings accept degrees or compass points (N, NNE, ... case-insensitive).\n- --edges/--blocked files hold from,to scene-id pairs; unreadable files count as empty.\n- `build` writes nodes.csv, edges.csv and tour.json; `nodes` skips the tour.\n"
    )
}
