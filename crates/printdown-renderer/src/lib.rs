//! Markdown-to-print-ready-HTML conversion with inlined styles.
//!
//! This crate provides [`PrintRenderer`], a staged converter that turns
//! markdown text into a self-contained HTML fragment suitable for printing:
//! every element carries an inline `style` attribute computed from the
//! configured [`FontSettings`], so the output needs no stylesheet.
//!
//! # Architecture
//!
//! Conversion runs as a fixed sequence of substitution stages over a single
//! working string. Fenced code and mermaid blocks are lifted into opaque
//! placeholders first, so their contents are never touched by later stages;
//! they are spliced back in near the end, with mermaid blocks rendered
//! through the pluggable [`DiagramRenderer`] trait.
//!
//! Rendering is infallible: malformed markdown falls through as literal
//! text, and diagram failures degrade to visible fallback blocks reported
//! in [`RenderResult::diagram_failures`].
//!
//! # Example
//!
//! ```
//! use printdown_renderer::{FontSettings, FontSize, PrintRenderer};
//!
//! let fonts = FontSettings {
//!     font_size: FontSize::Large,
//!     ..FontSettings::default()
//! };
//! let mut renderer = PrintRenderer::new().with_fonts(fonts);
//! let result = renderer.render("# Report\n\n- item");
//! assert!(result.html.contains("<h1"));
//! ```

mod block;
mod diagram;
mod escape;
mod extract;
mod font;
mod inline;
mod list;
mod paragraph;
mod placeholder;
mod renderer;
mod style;

pub use diagram::{DiagramError, DiagramFailure, DiagramRenderer, DisabledDiagramRenderer};
pub use escape::escape_html;
pub use font::{FontFamily, FontRole, FontSettings, FontSize};
pub use renderer::{PrintRenderer, RenderResult};
