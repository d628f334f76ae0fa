use std::sync::Arc;

use crate::error::RenderError;
use crate::models::RenderSpec;
use crate::services::EngineHandle;

/// Orchestrates one render: engine gate, scoped temp file, read-back.
///
/// The engine's output contract is file-path based, so each request gets a
/// uniquely named `.svg` temp file that is deleted on every exit path
/// (success, engine failure, read failure) via `NamedTempFile`'s drop.
pub struct RenderService {
    engine: Arc<EngineHandle>,
}

impl RenderService {
    pub fn new(engine: Arc<EngineHandle>) -> Self {
        Self { engine }
    }

    /// Render a validated spec to SVG bytes.
    ///
    /// Runs under `spawn_blocking` because model inference blocks for a
    /// duration proportional to the input size. No temp file is created
    /// when the engine never loaded.
    pub async fn generate(&self, spec: RenderSpec) -> Result<Vec<u8>, RenderError> {
        let renderer = self.engine.renderer().ok_or(RenderError::ModelNotLoaded)?;

        tokio::task::spawn_blocking(move || {
            let artifact = tempfile::Builder::new()
                .prefix("scrawl-")
                .suffix(".svg")
                .tempfile()?;

            renderer
                .render(&spec, artifact.path())
                .map_err(|e| RenderError::Engine(e.to_string()))?;

            let svg = std::fs::read(artifact.path())?;
            Ok(svg)
        })
        .await
        .map_err(|e| RenderError::TaskJoin(e.to_string()))?
    }
}
