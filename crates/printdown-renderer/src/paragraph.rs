//! Paragraph wrapping (stage 15): the final pass over the working text.

use crate::style::Styles;

/// Chunks already starting with one of these are block-level and stay
/// unwrapped.
const BLOCK_PREFIXES: [&str; 8] = [
    "<h", "<ul", "<ol", "<table", "<blockquote", "<pre", "<hr", "<div",
];

/// Split on blank lines; wrap non-block chunks in `<p>`, converting interior
/// single newlines to `<br>`.
pub(crate) fn wrap_paragraphs(text: &str, styles: &Styles) -> String {
    let style = styles.paragraph();
    text.split("\n\n")
        .filter_map(|chunk| {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                return None;
            }
            if BLOCK_PREFIXES.iter().any(|prefix| chunk.starts_with(prefix)) {
                Some(chunk.to_owned())
            } else {
                Some(format!(
                    r#"<p style="{style}">{}</p>"#,
                    chunk.replace('\n', "<br>")
                ))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
