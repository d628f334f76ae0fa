//! Test engines implementing the `Renderer` seam.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use scrawl::models::RenderSpec;
use scrawl::services::Renderer;

/// Writes a fixed minimal document, ignoring its input.
pub struct StubEngine;

impl Renderer for StubEngine {
    fn render(&self, _spec: &RenderSpec, output: &Path) -> anyhow::Result<()> {
        std::fs::write(output, "<svg/>")?;
        Ok(())
    }
}

/// Writes the first line back into the document, so each response can be
/// traced to the request that produced it.
pub struct EchoEngine;

impl Renderer for EchoEngine {
    fn render(&self, spec: &RenderSpec, output: &Path) -> anyhow::Result<()> {
        std::fs::write(output, format!("<svg>{}</svg>", spec.lines[0]))?;
        Ok(())
    }
}

/// Always fails with a recognizable cause.
pub struct FailingEngine;

impl Renderer for FailingEngine {
    fn render(&self, _spec: &RenderSpec, _output: &Path) -> anyhow::Result<()> {
        anyhow::bail!("stroke sampling diverged")
    }
}

/// Engine factory that counts construction attempts and always fails.
pub struct CountingFactory {
    pub attempts: Arc<AtomicUsize>,
}

impl CountingFactory {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn factory(&self) -> impl FnOnce() -> anyhow::Result<Arc<dyn Renderer>> {
        let attempts = self.attempts.clone();
        move || {
            attempts.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("model weights missing")
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}
