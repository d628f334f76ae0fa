use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use crate::models::RenderSpec;

/// A handwriting engine with a file-path output contract.
///
/// Implementations write a complete SVG document to `output` and raise on
/// internal failure. The service layer owns the lifetime of `output`; a
/// renderer must not keep the path around after returning.
pub trait Renderer: Send + Sync {
    fn render(&self, spec: &RenderSpec, output: &Path) -> anyhow::Result<()>;
}

/// Process-wide engine state, constructed once at startup.
///
/// Construction failure is memoized: the handle stays in the unloaded state
/// for the rest of the process lifetime and is never retried. After
/// construction the handle is read-only and shared across all requests.
pub struct EngineHandle {
    engine: Option<Arc<dyn Renderer>>,
}

impl EngineHandle {
    /// Run the engine factory exactly once, memoizing failure as the
    /// permanent unloaded state.
    pub fn initialize<F>(factory: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<Arc<dyn Renderer>>,
    {
        match factory() {
            Ok(engine) => {
                tracing::info!("Handwriting model initialized successfully");
                Self {
                    engine: Some(engine),
                }
            }
            Err(e) => {
                tracing::error!(%e, "Failed to initialize handwriting model");
                Self { engine: None }
            }
        }
    }

    /// Wrap an already-constructed renderer (used by tests).
    pub fn from_renderer(engine: Arc<dyn Renderer>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// A handle in the permanent unloaded state.
    pub fn unloaded() -> Self {
        Self { engine: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    pub fn renderer(&self) -> Option<Arc<dyn Renderer>> {
        self.engine.clone()
    }
}

// Layout constants for the built-in engine.
const PAGE_WIDTH: u32 = 960;
const LINE_HEIGHT: u32 = 64;
const MARGIN: u32 = 48;
const FONT_SIZE: u32 = 34;

const FONT_FAMILIES: [&str; 4] = [
    "'Homemade Apple', cursive",
    "'Caveat', cursive",
    "'Shadows Into Light', cursive",
    "'Dancing Script', cursive",
];

/// Built-in handwriting engine.
///
/// Typesets each line as stroked SVG text with a style-indexed face and
/// slant, plus per-glyph rotation jitter damped by the line's bias. Stands
/// in for an external stroke-synthesis model behind the [`Renderer`] seam.
pub struct HandEngine;

impl HandEngine {
    pub fn load() -> anyhow::Result<Arc<dyn Renderer>> {
        Ok(Arc::new(HandEngine))
    }

    fn line_markup(line: &str, bias: f64, style: i64, color: &str, width: f64, y: u32) -> String {
        let family = FONT_FAMILIES[style.rem_euclid(FONT_FAMILIES.len() as i64) as usize];
        let slant = -(2.0 + (style.rem_euclid(7)) as f64);

        // Higher bias means steadier strokes, so the jitter shrinks with it.
        let amplitude = 6.0 * (1.0 - bias.clamp(0.0, 1.0));
        let mut seed = (style as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ y as u64;
        let mut rotations = String::new();
        for _ in line.chars() {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (seed >> 33) as f64 / (1u64 << 31) as f64 - 1.0;
            let _ = write!(rotations, "{:.2} ", unit * amplitude);
        }

        format!(
            r#"  <text x="{x}" y="{y}" font-family="{family}" font-size="{FONT_SIZE}" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round" transform="skewX({slant:.1})" rotate="{rotate}">{text}</text>"#,
            x = MARGIN,
            rotate = rotations.trim_end(),
            text = escape_xml(line),
        )
    }
}

impl Renderer for HandEngine {
    fn render(&self, spec: &RenderSpec, output: &Path) -> anyhow::Result<()> {
        let height = MARGIN * 2 + LINE_HEIGHT * spec.lines.len() as u32;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{PAGE_WIDTH}" height="{height}" viewBox="0 0 {PAGE_WIDTH} {height}">"#
        );
        svg.push('\n');

        for (i, line) in spec.lines.iter().enumerate() {
            let y = MARGIN + LINE_HEIGHT * (i as u32 + 1) - LINE_HEIGHT / 2;
            svg.push_str(&Self::line_markup(
                line,
                spec.biases[i],
                spec.styles[i],
                &escape_xml(&spec.stroke_colors[i]),
                spec.stroke_widths[i],
                y,
            ));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");

        std::fs::write(output, svg)?;
        Ok(())
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
