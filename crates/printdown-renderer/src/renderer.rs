//! Print renderer: the staged markdown-to-HTML pipeline.
//!
//! Stage order is the behavioral contract of this converter and must not be
//! reordered: fenced-block extraction (mermaid before generic), tables,
//! inline code, headings 6..1, blockquotes, rules, lists, emphasis,
//! strikethrough, images, links, code restoration, sequential diagram
//! rendering, paragraph wrapping.

use crate::diagram::{self, DiagramFailure, DiagramRenderer, DisabledDiagramRenderer};
use crate::font::FontSettings;
use crate::placeholder::Replacements;
use crate::style::Styles;
use crate::{block, extract, inline, list, paragraph};

/// Result of converting one document.
#[derive(Debug)]
pub struct RenderResult {
    /// Print-ready HTML fragment. Always complete: failed diagrams appear
    /// as fallback blocks, never as holes or unresolved placeholders.
    pub html: String,
    /// Diagrams that degraded to fallback blocks, in source order.
    pub diagram_failures: Vec<DiagramFailure>,
}

/// Markdown-to-print-ready-HTML converter.
///
/// Conversion is infallible: malformed markdown falls through as literal
/// paragraph text and diagram failures degrade to visible fallback blocks.
///
/// # Example
///
/// ```
/// use printdown_renderer::{FontSettings, PrintRenderer};
///
/// let mut renderer = PrintRenderer::new().with_fonts(FontSettings::default());
/// let result = renderer.render("# Title\n\nSome **bold** text.");
/// assert!(result.html.contains("<h1"));
/// assert!(result.diagram_failures.is_empty());
/// ```
pub struct PrintRenderer {
    fonts: FontSettings,
    diagrams: Box<dyn DiagramRenderer>,
}

impl PrintRenderer {
    /// Create a renderer with default fonts and diagram rendering disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fonts: FontSettings::default(),
            diagrams: Box::new(DisabledDiagramRenderer),
        }
    }

    /// Set the font settings used to compute pixel sizes.
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontSettings) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the diagram renderer collaborator.
    #[must_use]
    pub fn with_diagram_renderer<R: DiagramRenderer + 'static>(mut self, renderer: R) -> Self {
        self.diagrams = Box::new(renderer);
        self
    }

    /// Convert markdown text to a print-ready HTML fragment.
    pub fn render(&mut self, markdown: &str) -> RenderResult {
        let styles = Styles::new(&self.fonts);

        // Stages 1-2: lift fenced blocks out before any substitution runs.
        let working = markdown.replace("\r\n", "\n");
        let (working, diagrams) = extract::extract_mermaid(&working);
        let (working, code_blocks) = extract::extract_code(&working, &styles);

        // Stages 3-12: block and inline substitutions, in contract order.
        let mut working = block::substitute_tables(&working, &styles);
        working = inline::substitute_inline_code(&working, &styles);
        working = block::substitute_headings(&working, &styles);
        working = block::substitute_blockquotes(&working, &styles);
        working = block::substitute_rules(&working, &styles);
        working = list::process_lists(&working, &styles);
        working = inline::substitute_emphasis(&working);
        working = inline::substitute_strikethrough(&working);
        working = inline::substitute_images(&working);
        working = inline::substitute_links(&working);

        // Stage 13: splice pre-rendered code blocks back in.
        if !code_blocks.is_empty() {
            let mut replacements = Replacements::with_capacity(code_blocks.len());
            for (index, html) in code_blocks {
                replacements.add_code(index, html);
            }
            replacements.apply(&mut working);
        }

        // Stage 14: render diagrams sequentially and splice them back in.
        let diagram_failures = self.render_diagrams(&mut working, &diagrams, &styles);

        // Stage 15: paragraph wrapping.
        let html = paragraph::wrap_paragraphs(&working, &styles);

        RenderResult {
            html,
            diagram_failures,
        }
    }

    /// Render extracted diagrams in placeholder order.
    ///
    /// Sequential on purpose: output order must match source order and must
    /// not depend on per-diagram latency. One failed diagram falls back and
    /// the loop continues; an init failure falls back every diagram.
    fn render_diagrams(
        &mut self,
        working: &mut String,
        diagrams: &[extract::ExtractedDiagram],
        styles: &Styles,
    ) -> Vec<DiagramFailure> {
        if diagrams.is_empty() {
            return Vec::new();
        }

        let mut failures = Vec::new();
        let mut replacements = Replacements::with_capacity(diagrams.len());

        match self.diagrams.init() {
            Ok(()) => {
                for extracted in diagrams {
                    let id = format!("mermaid-{}", extracted.index);
                    match self.diagrams.render(&id, &extracted.source) {
                        Ok(svg) => {
                            replacements
                                .add_mermaid(extracted.index, diagram::container(svg.trim()));
                        }
                        Err(err) => {
                            failures.push(DiagramFailure {
                                index: extracted.index,
                                message: err.to_string(),
                            });
                            replacements
                                .add_mermaid(extracted.index, diagram::fallback(&extracted.source, styles));
                        }
                    }
                }
            }
            Err(err) => {
                let message = err.to_string();
                for extracted in diagrams {
                    failures.push(DiagramFailure {
                        index: extracted.index,
                        message: message.clone(),
                    });
                    replacements
                        .add_mermaid(extracted.index, diagram::fallback(&extracted.source, styles));
                }
            }
        }

        replacements.apply(working);
        failures
    }
}

impl Default for PrintRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::DiagramError;
    use crate::font::{FontFamily, FontSize};

    fn render(markdown: &str) -> RenderResult {
        PrintRenderer::new().render(markdown)
    }

    fn render_with_size(markdown: &str, size: FontSize) -> RenderResult {
        PrintRenderer::new()
            .with_fonts(FontSettings {
                font_size: size,
                font_family: FontFamily::System,
            })
            .render(markdown)
    }

    /// Mock renderer that fails on configured indices.
    struct FlakyRenderer {
        calls: Vec<String>,
        fail_on: Vec<usize>,
    }

    impl FlakyRenderer {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                calls: Vec::new(),
                fail_on,
            }
        }
    }

    impl DiagramRenderer for FlakyRenderer {
        fn init(&mut self) -> Result<(), DiagramError> {
            Ok(())
        }

        fn render(&mut self, id: &str, source: &str) -> Result<String, DiagramError> {
            self.calls.push(id.to_owned());
            let index = self.calls.len() - 1;
            if self.fail_on.contains(&index) {
                Err(DiagramError::Render(format!("boom at {index}")))
            } else {
                Ok(format!("<svg data-id=\"{id}\">{source}</svg>"))
            }
        }
    }

    /// Mock renderer whose init always fails.
    struct BrokenRenderer;

    impl DiagramRenderer for BrokenRenderer {
        fn init(&mut self) -> Result<(), DiagramError> {
            Err(DiagramError::Unavailable("load failed".to_owned()))
        }

        fn render(&mut self, _id: &str, _source: &str) -> Result<String, DiagramError> {
            unreachable!("render must not be called after failed init")
        }
    }

    #[test]
    fn test_plain_paragraph() {
        let result = render("Hello, world!");
        assert!(result.html.starts_with("<p "));
        assert!(result.html.contains("Hello, world!"));
        assert!(result.diagram_failures.is_empty());
    }

    #[test]
    fn test_no_unresolved_placeholders_for_plain_input() {
        let result = render("# Title\n\nsome text with *emphasis* and a [link](x)\n\n- item");
        assert!(!result.html.contains("<<<CODEBLOCK"));
        assert!(!result.html.contains("<<<MERMAID"));
    }

    #[test]
    fn test_code_block_escaping() {
        let result = render("```\n<script>alert(1)</script>\n```");
        assert!(result.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!result.html.contains("<script>"));
    }

    #[test]
    fn test_code_block_not_wrapped_in_paragraph() {
        let result = render("```rust\nfn main() {}\n```");
        assert!(result.html.starts_with("<div "));
        assert!(result.html.contains("language-rust"));
        assert!(!result.html.contains("<p "));
    }

    #[test]
    fn test_emphasis_precedence_end_to_end() {
        let result = render("**bold** and *italic* and ***both***");
        assert_eq!(result.html.matches("<strong>bold</strong>").count(), 1);
        assert_eq!(result.html.matches("<em>italic</em>").count(), 1);
        assert_eq!(
            result.html.matches("<strong><em>both</em></strong>").count(),
            1
        );
    }

    #[test]
    fn test_list_kind_switching() {
        let result = render("- u1\n1. o1\n- u2");
        let html = &result.html;
        let first_ul = html.find("<ul ").unwrap();
        let ol = html.find("<ol ").unwrap();
        let second_ul = html.rfind("<ul ").unwrap();
        assert!(first_ul < ol);
        assert!(ol < second_ul);
        assert_eq!(html.matches("<ul ").count(), 2);
        assert_eq!(html.matches("<ol ").count(), 1);
    }

    #[test]
    fn test_font_scaling_large() {
        let result = render_with_size("# Title", FontSize::Large);
        assert!(result.html.contains("font-size:21px"));
    }

    #[test]
    fn test_font_scaling_small() {
        let result = render_with_size("# Title", FontSize::Small);
        assert!(result.html.contains("font-size:15px"));
    }

    #[test]
    fn test_diagram_success() {
        let markdown = "```mermaid\ngraph TD\n  A --> B\n```";
        let mut renderer =
            PrintRenderer::new().with_diagram_renderer(FlakyRenderer::new(Vec::new()));
        let result = renderer.render(markdown);

        assert!(result.html.contains(r#"<svg data-id="mermaid-0">"#));
        assert!(result.html.contains("overflow-x:auto"));
        assert!(result.diagram_failures.is_empty());
        assert!(!result.html.contains("<<<MERMAID"));
    }

    #[test]
    fn test_diagram_order_preserved() {
        let markdown = "```mermaid\nfirst\n```\n\n```mermaid\nsecond\n```\n\n```mermaid\nthird\n```";
        let mut renderer =
            PrintRenderer::new().with_diagram_renderer(FlakyRenderer::new(Vec::new()));
        let result = renderer.render(markdown);

        let a = result.html.find("first").unwrap();
        let b = result.html.find("second").unwrap();
        let c = result.html.find("third").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_diagram_failure_isolation() {
        let markdown = "# Doc\n\n```mermaid\nok diagram\n```\n\n```mermaid\nbad diagram\n```\n\ntrailing text";
        let mut renderer =
            PrintRenderer::new().with_diagram_renderer(FlakyRenderer::new(vec![1]));
        let result = renderer.render(markdown);

        // First diagram rendered, second fell back.
        assert!(result.html.contains(r#"<svg data-id="mermaid-0">ok diagram</svg>"#));
        assert!(result.html.contains("could not be rendered"));
        assert!(result.html.contains("bad diagram"));

        // Failure reported with the right index.
        assert_eq!(result.diagram_failures.len(), 1);
        assert_eq!(result.diagram_failures[0].index, 1);
        assert!(result.diagram_failures[0].message.contains("boom"));

        // Surrounding document intact and ordered.
        let h1 = result.html.find("<h1").unwrap();
        let ok = result.html.find("ok diagram").unwrap();
        let bad = result.html.find("bad diagram").unwrap();
        let tail = result.html.find("trailing text").unwrap();
        assert!(h1 < ok && ok < bad && bad < tail);
    }

    #[test]
    fn test_renderer_unavailable_falls_back_all() {
        let markdown = "```mermaid\none\n```\n\n```mermaid\ntwo\n```";
        let mut renderer = PrintRenderer::new().with_diagram_renderer(BrokenRenderer);
        let result = renderer.render(markdown);

        assert_eq!(result.html.matches("could not be rendered").count(), 2);
        assert_eq!(result.diagram_failures.len(), 2);
        assert!(!result.html.contains("<<<MERMAID"));
    }

    #[test]
    fn test_disabled_by_default() {
        let result = render("```mermaid\ngraph TD\n```");
        assert!(result.html.contains("could not be rendered"));
        assert_eq!(result.diagram_failures.len(), 1);
        assert!(result.diagram_failures[0]
            .message
            .contains("not configured"));
    }

    #[test]
    fn test_end_to_end_document() {
        let markdown = "# Title\n\nSome **bold** text.\n\n- item one\n- item two\n\n| A | B |\n|---|---|\n| 1 | 2 |";
        let result = render(markdown);
        let html = &result.html;

        let h1 = html.find("<h1").unwrap();
        let p = html.find("Some <strong>bold</strong> text.").unwrap();
        let ul = html.find("<ul ").unwrap();
        let table = html.find("<table").unwrap();
        assert!(h1 < p && p < ul && ul < table);

        assert!(html.contains(">Title</h1>"));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(html.contains(">item one</li>"));
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 2);
    }

    #[test]
    fn test_crlf_normalized() {
        let result = render("# Title\r\n\r\ntext");
        assert!(result.html.contains(">Title</h1>"));
        assert!(result.html.contains(">text</p>"));
    }

    #[test]
    fn test_malformed_markdown_degrades_to_text() {
        let result = render("[unclosed link( and **dangling");
        assert!(result.html.starts_with("<p "));
        assert!(result.html.contains("[unclosed link( and **dangling"));
    }

    #[test]
    fn test_blockquote_and_rule() {
        let result = render("> quote\n\n---\n\nafter");
        assert!(result.html.contains("<blockquote"));
        assert!(result.html.contains("<hr"));
        assert!(result.html.contains(">after</p>"));
    }

    #[test]
    fn test_default_impl() {
        let mut renderer = PrintRenderer::default();
        let result = renderer.render("x");
        assert!(result.html.contains("x"));
    }
}
