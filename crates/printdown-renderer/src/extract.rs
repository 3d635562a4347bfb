//! Fenced block extraction (stages 1 and 2 of the pipeline).
//!
//! Mermaid fences must be lifted before generic fences: both use the same
//! triple-backtick syntax and a mermaid block captured by the generic pass
//! would render as plain code.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;
use crate::placeholder;
use crate::style::Styles;

static MERMAID_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```mermaid[ \t]*\n([\s\S]*?)```").unwrap());

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([A-Za-z0-9_#+.-]*)[ \t]*\n([\s\S]*?)```").unwrap());

/// A mermaid block lifted out of the working text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedDiagram {
    pub(crate) index: usize,
    /// Trimmed diagram source.
    pub(crate) source: String,
}

/// Replace mermaid fences with placeholders, in arrival order.
pub(crate) fn extract_mermaid(text: &str) -> (String, Vec<ExtractedDiagram>) {
    let mut diagrams = Vec::new();
    let replaced = MERMAID_FENCE.replace_all(text, |caps: &Captures<'_>| {
        let index = diagrams.len();
        diagrams.push(ExtractedDiagram {
            index,
            source: caps[1].trim().to_owned(),
        });
        placeholder::mermaid_token(index)
    });
    (replaced.into_owned(), diagrams)
}

/// Replace remaining fences with placeholders, pre-rendering each block.
///
/// This is the only stage that HTML-escapes user text; everything extracted
/// here bypasses all later substitutions.
pub(crate) fn extract_code(text: &str, styles: &Styles) -> (String, Vec<(usize, String)>) {
    let mut blocks = Vec::new();
    let replaced = CODE_FENCE.replace_all(text, |caps: &Captures<'_>| {
        let index = blocks.len();
        let lang = &caps[1];
        let body = caps[2].strip_suffix('\n').unwrap_or(&caps[2]);
        blocks.push((index, render_code_block(lang, body, styles)));
        placeholder::code_token(index)
    });
    (replaced.into_owned(), blocks)
}

/// Pre-render a fenced block as `<pre><code>` with an optional language label.
fn render_code_block(lang: &str, body: &str, styles: &Styles) -> String {
    let code = escape_html(body);
    if lang.is_empty() {
        format!(
            r#"<div style="margin:12px 0;"><pre style="{}"><code style="{}">{code}</code></pre></div>"#,
            styles.code_block_pre(),
            styles.code_block_text(),
        )
    } else {
        format!(
            r#"<div style="margin:12px 0;"><div style="{}">{lang}</div><pre style="{}"><code class="language-{lang}" style="{}">{code}</code></pre></div>"#,
            styles.code_label(),
            styles.code_block_pre(),
            styles.code_block_text(),
        )
    }
}
