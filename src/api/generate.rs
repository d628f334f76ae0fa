use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::RenderSpec;
use crate::server::AppState;

/// Request body for handwriting generation.
///
/// Documentation-only schema: the handler reads the raw body so that the
/// decode and validation errors keep their fixed order and messages.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateRequest {
    /// Lines of text to write (each 75 characters or less)
    pub lines: Vec<String>,
    /// Per-line legibility bias (higher is neater), same length as lines
    pub biases: Vec<f64>,
    /// Per-line style index, same length as lines
    pub styles: Vec<i64>,
    /// Per-line stroke color (e.g. "#000000"), same length as lines
    pub stroke_colors: Vec<String>,
    /// Per-line stroke width, same length as lines
    pub stroke_widths: Vec<f64>,
    /// Suggested download name for the generated SVG
    pub filename: String,
}

/// Generate handwriting from text
///
/// Validates the request, renders it through the handwriting engine and
/// returns the SVG document.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Rendered handwriting", content_type = "image/svg+xml"),
        (status = 400, description = "Malformed or invalid request body"),
        (status = 500, description = "Engine unavailable or render failure"),
    ),
    tag = "Generation"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let spec = RenderSpec::from_json_bytes(&body)?;

    tracing::info!(lines = spec.line_count(), "Generating handwriting");

    let disposition = content_disposition(&spec.filename);
    let svg = state.render_service.generate(spec).await?;

    tracing::info!(size_bytes = svg.len(), "Handwriting generated successfully");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(svg),
    )
        .into_response())
}

/// Build an `inline` disposition from the client-suggested filename.
///
/// The name only ever reaches the client as a download hint; quote and
/// control characters are stripped so it stays a valid header value.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| *c != '"' && *c != '\\')
        .collect();
    let name = if safe.is_empty() {
        "handwriting.svg"
    } else {
        safe.as_str()
    };
    format!("inline; filename=\"{name}\"")
}
