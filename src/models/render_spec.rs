use serde_json::Value;

use crate::error::ApiError;

/// Maximum characters per line (character count, not bytes).
pub const MAX_LINE_CHARS: usize = 75;

/// Required payload keys, checked in this order so the first missing one
/// names the error.
const REQUIRED_FIELDS: [&str; 6] = [
    "lines",
    "biases",
    "styles",
    "stroke_colors",
    "stroke_widths",
    "filename",
];

/// A validated handwriting render job.
///
/// All five per-line vectors are guaranteed to share one length N >= 1 and
/// every line fits the character limit. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct RenderSpec {
    pub lines: Vec<String>,
    pub biases: Vec<f64>,
    pub styles: Vec<i64>,
    pub stroke_colors: Vec<String>,
    pub stroke_widths: Vec<f64>,
    /// Suggested download name; never used for server-side storage.
    pub filename: String,
}

impl RenderSpec {
    /// Decode and validate a raw request body.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// JSON decode, required keys, non-empty lines, line length, then
    /// sibling array lengths. Callers depend on which message wins when a
    /// payload violates several rules at once.
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(raw).map_err(|_| ApiError::InvalidJson)?;
        let map = value.as_object().ok_or(ApiError::InvalidJson)?;

        for field in REQUIRED_FIELDS {
            if !map.contains_key(field) {
                return Err(ApiError::MissingField(field));
            }
        }

        let lines = string_array(&map["lines"])?;
        if lines.is_empty() {
            return Err(ApiError::EmptyLines);
        }
        if lines.iter().any(|l| l.chars().count() > MAX_LINE_CHARS) {
            return Err(ApiError::LineTooLong);
        }

        let n = lines.len();
        for field in ["biases", "styles", "stroke_colors", "stroke_widths"] {
            let len = map[field].as_array().ok_or(ApiError::InvalidJson)?.len();
            if len != n {
                return Err(ApiError::LengthMismatch);
            }
        }

        Ok(RenderSpec {
            lines,
            biases: f64_array(&map["biases"])?,
            styles: i64_array(&map["styles"])?,
            stroke_colors: string_array(&map["stroke_colors"])?,
            stroke_widths: f64_array(&map["stroke_widths"])?,
            filename: map["filename"]
                .as_str()
                .ok_or(ApiError::InvalidJson)?
                .to_string(),
        })
    }

    /// Number of lines (equals the length of every sibling vector).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn string_array(value: &Value) -> Result<Vec<String>, ApiError> {
    value
        .as_array()
        .ok_or(ApiError::InvalidJson)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or(ApiError::InvalidJson))
        .collect()
}

fn f64_array(value: &Value) -> Result<Vec<f64>, ApiError> {
    value
        .as_array()
        .ok_or(ApiError::InvalidJson)?
        .iter()
        .map(|v| v.as_f64().ok_or(ApiError::InvalidJson))
        .collect()
}

fn i64_array(value: &Value) -> Result<Vec<i64>, ApiError> {
    value
        .as_array()
        .ok_or(ApiError::InvalidJson)?
        .iter()
        .map(|v| v.as_i64().ok_or(ApiError::InvalidJson))
        .collect()
}
