/// Sixteen-point compass rose, 22.5 degrees apart, clockwise from north.
const COMPASS_POINTS: [(&str, f64); 16] = [
    ("N", 0.0),
    ("NNE", 22.5),
    ("NE", 45.0),
    ("ENE", 67.5),
    ("E", 90.0),
    ("ESE", 112.5),
    ("SE", 135.0),
    ("SSE", 157.5),
    ("S", 180.0),
    ("SSW", 202.5),
    ("SW", 225.0),
    ("WSW", 247.5),
    ("W", 270.0),
    ("WNW", 292.5),
    ("NW", 315.0),
    ("NNW", 337.5),
];

#[derive(Debug)]
pub struct HeadingParseError {
    pub token: String,
}

impl std::fmt::Display for HeadingParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized heading {:?} (expected degrees or a compass point)",
            self.token
        )
    }
}

impl std::error::Error for HeadingParseError {}

/// Parse a heading cell: either a raw degree value or a compass-point
/// abbreviation, case-insensitive. Unrecognized tokens are errors, never a
/// silent default.
pub fn parse_heading_deg(token: &str) -> Result<f64, HeadingParseError> {
    let trimmed = token.trim();
    let upper = trimmed.to_ascii_uppercase();
    for (name, deg) in COMPASS_POINTS {
        if upper == name {
            return Ok(deg);
        }
    }
    trimmed.parse::<f64>().map_err(|_| HeadingParseError {
        token: trimmed.to_string(),
    })
}
