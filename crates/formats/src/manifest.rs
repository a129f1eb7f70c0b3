//! Scene manifest loader.
//!
//! Columns: `id,type,floor,section,notes,filename,heading,moveHeading,stepMeters`.
//! `moveHeading` and `stepMeters` are optional per row. The output is sorted
//! by the numeric value of the id column, which defines the sequential
//! traversal order.

use scene::{DEFAULT_STEP_METERS, SceneId, SceneRecord};

use crate::csv::{CsvError, parse_csv};
use crate::heading::{HeadingParseError, parse_heading_deg};

const COL_ID: usize = 0;
const COL_NOTES: usize = 4;
const COL_FILENAME: usize = 5;
const COL_HEADING: usize = 6;
const COL_MOVE_HEADING: usize = 7;
const COL_STEP_METERS: usize = 8;

#[derive(Debug)]
pub enum ManifestError {
    Csv(CsvError),
    MissingId { row: usize },
    InvalidId { row: usize, value: String },
    MissingFilename { row: usize, id: SceneId },
    InvalidHeading { row: usize, id: SceneId, source: HeadingParseError },
    InvalidMoveHeading { row: usize, id: SceneId, source: HeadingParseError },
    InvalidStep { row: usize, id: SceneId, value: String },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Csv(e) => write!(f, "manifest CSV error: {e}"),
            ManifestError::MissingId { row } => {
                write!(f, "manifest row {row}: missing scene id")
            }
            ManifestError::InvalidId { row, value } => {
                write!(f, "manifest row {row}: non-numeric scene id {value:?}")
            }
            ManifestError::MissingFilename { row, id } => {
                write!(f, "manifest row {row} (scene {id}): missing filename")
            }
            ManifestError::InvalidHeading { row, id, source } => {
                write!(f, "manifest row {row} (scene {id}): {source}")
            }
            ManifestError::InvalidMoveHeading { row, id, source } => {
                write!(f, "manifest row {row} (scene {id}): moveHeading: {source}")
            }
            ManifestError::InvalidStep { row, id, value } => {
                write!(f, "manifest row {row} (scene {id}): bad stepMeters {value:?}")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<CsvError> for ManifestError {
    fn from(e: CsvError) -> Self {
        ManifestError::Csv(e)
    }
}

/// Parse the manifest text into scene records sorted by numeric id.
///
/// A leading header row (non-numeric id cell) is skipped. Any malformed
/// data row aborts the whole build.
pub fn parse_scene_manifest(text: &str) -> Result<Vec<SceneRecord>, ManifestError> {
    let rows = parse_csv(text)?;
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let id_cell = cell(row, COL_ID);
        if index == 0 && !id_cell.is_empty() && id_cell.parse::<i64>().is_err() {
            // Header row.
            continue;
        }
        if id_cell.is_empty() {
            return Err(ManifestError::MissingId { row: row_number });
        }
        let id = id_cell
            .parse::<i64>()
            .map(SceneId)
            .map_err(|_| ManifestError::InvalidId {
                row: row_number,
                value: id_cell.to_string(),
            })?;

        let filename = cell(row, COL_FILENAME);
        if filename.is_empty() {
            return Err(ManifestError::MissingFilename {
                row: row_number,
                id,
            });
        }

        let heading_deg = parse_heading_deg(cell(row, COL_HEADING)).map_err(|source| {
            ManifestError::InvalidHeading {
                row: row_number,
                id,
                source,
            }
        })?;

        let move_cell = cell(row, COL_MOVE_HEADING);
        let move_heading_deg = if move_cell.is_empty() {
            None
        } else {
            Some(parse_heading_deg(move_cell).map_err(|source| {
                ManifestError::InvalidMoveHeading {
                    row: row_number,
                    id,
                    source,
                }
            })?)
        };

        let step_cell = cell(row, COL_STEP_METERS);
        let step_meters = if step_cell.is_empty() {
            DEFAULT_STEP_METERS
        } else {
            step_cell
                .parse::<f64>()
                .map_err(|_| ManifestError::InvalidStep {
                    row: row_number,
                    id,
                    value: step_cell.to_string(),
                })?
        };

        records.push(SceneRecord {
            id,
            scene_key: scene_key_from_filename(filename),
            heading_deg,
            move_heading_deg,
            step_meters,
            title: cell(row, COL_NOTES).to_string(),
        });
    }

    records.sort_by_key(|r| r.id);
    Ok(records)
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

/// Stable scene key: the filename with any directory prefix and the final
/// extension stripped.
fn scene_key_from_filename(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}
