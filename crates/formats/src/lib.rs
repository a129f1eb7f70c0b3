pub mod capture;
pub mod csv;
pub mod edge_list;
pub mod heading;
pub mod manifest;
pub mod tables;

pub use capture::{CaptureConfigError, parse_capture_settings};
pub use csv::{CsvError, parse_csv};
pub use edge_list::{EdgeListError, parse_edge_list};
pub use heading::{HeadingParseError, parse_heading_deg};
pub use manifest::{ManifestError, parse_scene_manifest};
pub use tables::{edge_table, node_table};
