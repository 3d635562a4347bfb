//! Diagram collaborator contract and the stage-14 fallback policy.
//!
//! Rendering failures never fail the conversion: each failed diagram
//! degrades to a warning-styled block carrying the escaped source, and the
//! remaining document is unaffected.

use crate::escape::escape_html;
use crate::style::Styles;

/// External diagram renderer.
///
/// Implementations turn diagram source text into displayable SVG markup.
/// The converter calls [`init`](Self::init) once per conversion before the
/// first render, then [`render`](Self::render) once per diagram, strictly in
/// source order.
pub trait DiagramRenderer {
    /// Prepare the renderer. Must be idempotent.
    ///
    /// An error here means the renderer is unavailable; every diagram in the
    /// document degrades to the fallback block.
    fn init(&mut self) -> Result<(), DiagramError>;

    /// Render one diagram to SVG markup.
    ///
    /// `id` is unique per diagram within a conversion, for renderers that
    /// cache or namespace by element id.
    fn render(&mut self, id: &str, source: &str) -> Result<String, DiagramError>;
}

/// Diagram rendering error.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// The renderer could not be set up at all.
    #[error("diagram renderer unavailable: {0}")]
    Unavailable(String),
    /// One diagram failed to render.
    #[error("diagram rendering failed: {0}")]
    Render(String),
}

/// A diagram that degraded to the fallback block, reported in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramFailure {
    /// Source-order index of the failed diagram.
    pub index: usize,
    /// Human-readable failure reason.
    pub message: String,
}

/// Renderer used when diagram rendering is not configured.
///
/// Always unavailable, so mermaid blocks degrade to fallback blocks instead
/// of disappearing.
#[derive(Debug, Default)]
pub struct DisabledDiagramRenderer;

impl DiagramRenderer for DisabledDiagramRenderer {
    fn init(&mut self) -> Result<(), DiagramError> {
        Err(DiagramError::Unavailable(
            "diagram rendering is not configured".to_owned(),
        ))
    }

    fn render(&mut self, _id: &str, _source: &str) -> Result<String, DiagramError> {
        Err(DiagramError::Unavailable(
            "diagram rendering is not configured".to_owned(),
        ))
    }
}

/// Wrap rendered markup in a centered, horizontally scrollable container.
pub(crate) fn container(svg: &str) -> String {
    format!(r#"<div style="text-align:center;overflow-x:auto;margin:12px 0;">{svg}</div>"#)
}

/// Warning-styled fallback block with the escaped diagram source.
pub(crate) fn fallback(source: &str, styles: &Styles) -> String {
    format!(
        r#"<div style="border:1px solid #e0a800;background:#fff8e1;border-radius:4px;padding:8px 12px;margin:12px 0;"><div style="{}">&#9888; Diagram could not be rendered</div><pre style="margin:0;white-space:pre-wrap;"><code style="{}">{}</code></pre></div>"#,
        styles.diagram_label(),
        styles.code_block_text(),
        escape_html(source)
    )
}
