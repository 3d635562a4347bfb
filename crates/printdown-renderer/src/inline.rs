//! Inline substitutions: inline code, emphasis, strikethrough, images, links.
//!
//! Inline code runs early (stage 4) so markers inside backtick spans are
//! never reinterpreted. Emphasis runs triple, then double, then single
//! marker; images run before links because link syntax is a subset of image
//! syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::style::Styles;

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static BOLD_ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*\n]+)\*\*\*").unwrap());
static BOLD_ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"___([^_\n]+)___").unwrap());
static BOLD_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());
static BOLD_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_\n]+)__").unwrap());

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~([^~\n]+)~~").unwrap());

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Single-backtick spans (stage 4). Bodies are escaped: inline code is a
/// code context. Emphasis and strikethrough markers are entity-encoded so
/// the later passes cannot match inside the span.
pub(crate) fn substitute_inline_code(text: &str, styles: &Styles) -> String {
    let style = styles.inline_code();
    INLINE_CODE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let body = escape_html(&caps[1])
                .replace('*', "&#42;")
                .replace('_', "&#95;")
                .replace('~', "&#126;");
            format!(r#"<code style="{style}">{body}</code>"#)
        })
        .into_owned()
}

/// Emphasis (stage 9): triple markers, then double, then single, for both
/// the `*` and `_` families.
pub(crate) fn substitute_emphasis(text: &str) -> String {
    let mut result = BOLD_ITALIC_STAR
        .replace_all(text, "<strong><em>${1}</em></strong>")
        .into_owned();
    result = BOLD_ITALIC_UNDERSCORE
        .replace_all(&result, "<strong><em>${1}</em></strong>")
        .into_owned();
    result = BOLD_STAR
        .replace_all(&result, "<strong>${1}</strong>")
        .into_owned();
    result = BOLD_UNDERSCORE
        .replace_all(&result, "<strong>${1}</strong>")
        .into_owned();
    result = emphasize_single(&result, b'*');
    emphasize_single(&result, b'_')
}

/// Single-marker italic.
///
/// A marker adjacent to another of the same marker never opens or closes a
/// span, so text already consumed by the double/triple passes (or stray
/// longer runs) is left alone. Content runs to the first closing marker on
/// the same line.
fn emphasize_single(text: &str, marker: u8) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut flushed = 0;
    let mut i = 0;

    while i < bytes.len() {
        let opens = bytes[i] == marker
            && (i == 0 || bytes[i - 1] != marker)
            && i + 1 < bytes.len()
            && bytes[i + 1] != marker
            && bytes[i + 1] != b'\n';
        if opens {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] != marker && bytes[j] != b'\n' {
                j += 1;
            }
            let closes = j < bytes.len()
                && bytes[j] == marker
                && (j + 1 >= bytes.len() || bytes[j + 1] != marker);
            if closes {
                out.push_str(&text[flushed..i]);
                out.push_str("<em>");
                out.push_str(&text[i + 1..j]);
                out.push_str("</em>");
                i = j + 1;
                flushed = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[flushed..]);
    out
}

/// Strikethrough (stage 10).
pub(crate) fn substitute_strikethrough(text: &str) -> String {
    STRIKETHROUGH.replace_all(text, "<del>${1}</del>").into_owned()
}

/// Images (stage 11). Must run before links.
pub(crate) fn substitute_images(text: &str) -> String {
    IMAGE
        .replace_all(text, r#"<img src="${2}" alt="${1}" style="max-width:100%;">"#)
        .into_owned()
}

/// Links (stage 12).
pub(crate) fn substitute_links(text: &str) -> String {
    LINK.replace_all(
        text,
        r#"<a href="${2}" style="color:#1a73e8;text-decoration:none;">${1}</a>"#,
    )
    .into_owned()
}
