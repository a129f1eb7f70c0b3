use std::collections::BTreeMap;

use scene::CaptureSettings;

#[derive(Debug)]
pub enum CaptureConfigError {
    Parse(serde_json::Error),
}

impl std::fmt::Display for CaptureConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureConfigError::Parse(e) => write!(f, "capture config parse error: {e}"),
        }
    }
}

impl std::error::Error for CaptureConfigError {}

/// Parse the per-scene capture configuration: a JSON object keyed by scene
/// key. Whether every listed scene actually has an entry is checked later
/// by the tour emitter, which knows the scene table.
pub fn parse_capture_settings(
    payload: &str,
) -> Result<BTreeMap<String, CaptureSettings>, CaptureConfigError> {
    serde_json::from_str(payload).map_err(CaptureConfigError::Parse)
}
