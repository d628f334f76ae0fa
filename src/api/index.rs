use axum::{extract::State, response::Html};

use crate::server::AppState;

/// Static status page served at `/`.
///
/// Pure presentation: the only dynamic bits are the listen port and
/// whether the engine loaded at startup.
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let (class, status) = if state.engine.is_loaded() {
        ("success", "Loaded")
    } else {
        ("error", "Failed to load")
    };

    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
    <title>Handwriting Generation API</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .status {{ padding: 20px; border-radius: 5px; margin: 20px 0; }}
        .success {{ background: #d4edda; border: 1px solid #c3e6cb; color: #155724; }}
        .error {{ background: #f8d7da; border: 1px solid #f5c6cb; color: #721c24; }}
    </style>
</head>
<body>
    <h1>Handwriting Generation API Server</h1>
    <p>This server provides an API for generating handwritten text.</p>

    <div class="status {class}">
        <strong>Server is running</strong><br>
        Port: {port}<br>
        Model status: {status}
    </div>

    <h2>API Endpoints:</h2>
    <ul>
        <li><strong>POST /generate</strong> - Generate handwriting from text</li>
        <li><strong>GET /health</strong> - Check server health</li>
    </ul>

    <h2>Usage:</h2>
    <p>Send a POST request to <code>/generate</code> with JSON data:</p>
    <pre>{{
  "lines": ["Hello", "World"],
  "biases": [0.7, 0.7],
  "styles": [7, 7],
  "stroke_colors": ["#000000", "#000000"],
  "stroke_widths": [2, 2],
  "filename": "output.svg"
}}</pre>
</body>
</html>
"##,
        port = state.port,
    ))
}
