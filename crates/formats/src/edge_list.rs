//! Loader for the hand-edited edge override files (`from,to` per row).
//!
//! Both the manual-edge and blocked-edge files use this shape. Pairs that
//! reference unknown scene ids are dropped later by the graph builder;
//! rows that are not id pairs at all are malformed input and fatal.

use scene::SceneId;

use crate::csv::{CsvError, parse_csv};

#[derive(Debug)]
pub enum EdgeListError {
    Csv(CsvError),
    MissingColumn { row: usize },
    InvalidId { row: usize, value: String },
}

impl std::fmt::Display for EdgeListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeListError::Csv(e) => write!(f, "edge list CSV error: {e}"),
            EdgeListError::MissingColumn { row } => {
                write!(f, "edge list row {row}: expected two columns (from,to)")
            }
            EdgeListError::InvalidId { row, value } => {
                write!(f, "edge list row {row}: non-numeric scene id {value:?}")
            }
        }
    }
}

impl std::error::Error for EdgeListError {}

impl From<CsvError> for EdgeListError {
    fn from(e: CsvError) -> Self {
        EdgeListError::Csv(e)
    }
}

pub fn parse_edge_list(text: &str) -> Result<Vec<(SceneId, SceneId)>, EdgeListError> {
    let rows = parse_csv(text)?;
    let mut pairs = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let from = row.first().map(|s| s.trim()).unwrap_or("");
        let to = row.get(1).map(|s| s.trim()).unwrap_or("");
        if index == 0 && from.parse::<i64>().is_err() && !from.is_empty() {
            // Header row.
            continue;
        }
        if from.is_empty() || to.is_empty() {
            return Err(EdgeListError::MissingColumn { row: row_number });
        }
        let from = parse_id(from, row_number)?;
        let to = parse_id(to, row_number)?;
        pairs.push((from, to));
    }

    Ok(pairs)
}

fn parse_id(value: &str, row: usize) -> Result<SceneId, EdgeListError> {
    value
        .parse::<i64>()
        .map(SceneId)
        .map_err(|_| EdgeListError::InvalidId {
            row,
            value: value.to_string(),
        })
}
