//! Full-document conversion through the public API.

use printdown_renderer::{
    DiagramError, DiagramRenderer, FontFamily, FontSettings, FontSize, PrintRenderer,
};

/// Renderer that succeeds for every diagram, tagging output with the id.
struct StubRenderer;

impl DiagramRenderer for StubRenderer {
    fn init(&mut self) -> Result<(), DiagramError> {
        Ok(())
    }

    fn render(&mut self, id: &str, source: &str) -> Result<String, DiagramError> {
        Ok(format!("<svg data-id=\"{id}\">{source}</svg>"))
    }
}

/// Renderer that fails every render call after a successful init.
struct FailingRenderer;

impl DiagramRenderer for FailingRenderer {
    fn init(&mut self) -> Result<(), DiagramError> {
        Ok(())
    }

    fn render(&mut self, _id: &str, _source: &str) -> Result<String, DiagramError> {
        Err(DiagramError::Render("service unreachable".to_owned()))
    }
}

#[test]
fn test_full_document_structure() {
    let markdown = "\
# Title

Some **bold** text.

- item one
- item two

| A | B |
|---|---|
| 1 | 2 |";

    let result = PrintRenderer::new().render(markdown);
    let html = &result.html;

    assert!(result.diagram_failures.is_empty());
    assert!(!html.contains("<<<CODEBLOCK"));
    assert!(!html.contains("<<<MERMAID"));

    let h1 = html.find("<h1").expect("heading present");
    let p = html
        .find("Some <strong>bold</strong> text.")
        .expect("paragraph present");
    let ul = html.find("<ul ").expect("list present");
    let table = html.find("<table").expect("table present");
    assert!(h1 < p && p < ul && ul < table);

    assert!(html.contains(">Title</h1>"));
    assert_eq!(html.matches("<li ").count(), 2);
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 2);
}

#[test]
fn test_full_document_with_code_and_diagram() {
    let markdown = "\
# Doc

```mermaid
graph TD
  A --> B
```

```rust
fn main() {}
```

done";

    let mut renderer = PrintRenderer::new().with_diagram_renderer(StubRenderer);
    let result = renderer.render(markdown);
    let html = &result.html;

    assert!(result.diagram_failures.is_empty());
    assert!(html.contains(r#"<svg data-id="mermaid-0">"#));
    assert!(html.contains("language-rust"));
    assert!(html.contains(">done</p>"));

    let diagram = html.find("<svg").unwrap();
    let code = html.find("language-rust").unwrap();
    assert!(diagram < code);
}

#[test]
fn test_font_settings_flow_through() {
    let fonts = FontSettings {
        font_size: FontSize::Large,
        font_family: FontFamily::Serif,
    };
    let result = PrintRenderer::new().with_fonts(fonts).render("# Title");

    assert!(result.html.contains("font-size:21px"));
    assert!(result.html.contains("Georgia"));
}

#[test]
fn test_diagram_failures_reported_and_degraded() {
    let markdown = "```mermaid\ngraph TD\n```\n\ntext after";
    let mut renderer = PrintRenderer::new().with_diagram_renderer(FailingRenderer);
    let result = renderer.render(markdown);

    assert_eq!(result.diagram_failures.len(), 1);
    assert_eq!(result.diagram_failures[0].index, 0);
    assert!(result.diagram_failures[0]
        .message
        .contains("service unreachable"));

    assert!(result.html.contains("could not be rendered"));
    assert!(result.html.contains(">text after</p>"));
    assert!(!result.html.contains("<<<MERMAID"));
}
