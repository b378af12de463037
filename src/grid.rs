//! Decoding of grid API responses.
//!
//! The endpoint answers with `{"lines": [{"start": {"lat", "lng"}, ...}]}`;
//! only each line's starting coordinate is of interest here. Fields other
//! than these are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{GridError, GridResult};

/// Starting corner of one grid square. Plain value, no identity beyond
/// its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Decode a grid response body into the starting coordinate of each grid
/// line, in response order.
///
/// Invalid JSON is a [`GridError::Parse`]; a missing `lines` array or a
/// non-object line entry is a [`GridError::Schema`]. A single bad entry
/// aborts the whole decode with no partial result. A line missing its
/// `start` object, or a `start` missing `lat`/`lng`, yields 0.0 for the
/// absent fields.
pub fn parse_grid(body: &str) -> GridResult<Vec<Coordinate>> {
    let doc: Value = serde_json::from_str(body)?;

    let lines = match doc.get("lines") {
        Some(value) => value
            .as_array()
            .ok_or_else(|| GridError::Schema("'lines' is not an array".to_string()))?,
        None => return Err(GridError::Schema("missing 'lines'".to_string())),
    };

    let mut coords = Vec::with_capacity(lines.len());
    for (index, entry) in lines.iter().enumerate() {
        let line = entry.as_object().ok_or_else(|| {
            GridError::Schema(format!("non-object entry at index {}", index))
        })?;

        let start = line.get("start");
        if start.is_none() {
            warn!(index = index, "Grid line has no 'start', defaulting to 0.0/0.0");
        }

        coords.push(Coordinate {
            lat: start_field(start, "lat"),
            lng: start_field(start, "lng"),
        });
    }

    Ok(coords)
}

/// Numeric field of a line's `start` object, 0.0 when absent or non-numeric.
fn start_field(start: Option<&Value>, key: &str) -> f64 {
    start
        .and_then(|s| s.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
