//! Block-level substitutions: tables, headings, blockquotes, rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::style::Styles;

/// Heading patterns from level 6 down to 1. The order is load-bearing for
/// line-anchored prefix matching and must not change.
static HEADINGS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let hashes = "#".repeat(level);
            (level, Regex::new(&format!("(?m)^{hashes} (.*)$")).unwrap())
        })
        .collect()
});

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:---|\*\*\*|___)$").unwrap());

/// GFM pipe tables, detected line by line (stage 3).
///
/// A table is a header row, a delimiter row of dashes with optional colons,
/// and zero or more body rows. Everything else passes through untouched.
pub(crate) fn substitute_tables(text: &str, styles: &Styles) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if is_table_row(lines[i]) && i + 1 < lines.len() && is_delimiter_row(lines[i + 1]) {
            let header = split_cells(lines[i]);
            let mut body = Vec::new();
            let mut j = i + 2;
            while j < lines.len() && is_table_row(lines[j]) {
                body.push(split_cells(lines[j]));
                j += 1;
            }
            out.push(render_table(&header, &body, styles));
            i = j;
        } else {
            out.push(lines[i].to_owned());
            i += 1;
        }
    }

    out.join("\n")
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed[1..].contains('|')
}

fn is_delimiter_row(line: &str) -> bool {
    if !is_table_row(line) {
        return false;
    }
    let cells = split_cells(line);
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let bare = cell
                .trim_start_matches(':')
                .trim_end_matches(':');
            !bare.is_empty() && bare.bytes().all(|b| b == b'-')
        })
}

fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_owned()).collect()
}

/// Emit the table as a single line so paragraph wrapping treats it as one
/// block-level chunk.
fn render_table(header: &[String], body: &[Vec<String>], styles: &Styles) -> String {
    let mut html = format!(r#"<table style="{}"><thead><tr>"#, styles.table());
    for cell in header {
        html.push_str(&format!(
            r#"<th style="{}">{cell}</th>"#,
            styles.table_cell(true)
        ));
    }
    html.push_str("</tr></thead><tbody>");
    for row in body {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!(
                r#"<td style="{}">{cell}</td>"#,
                styles.table_cell(false)
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// ATX headings (stage 5), levels 6 down to 1.
pub(crate) fn substitute_headings(text: &str, styles: &Styles) -> String {
    let mut result = text.to_owned();
    for (level, pattern) in HEADINGS.iter() {
        let style = styles.heading(*level);
        let replacement = format!(r#"<h{level} style="{style}">${{1}}</h{level}>"#);
        result = pattern.replace_all(&result, replacement.as_str()).into_owned();
    }
    result
}

/// Single-line blockquotes (stage 6). No multi-line merging.
pub(crate) fn substitute_blockquotes(text: &str, styles: &Styles) -> String {
    let replacement = format!(
        r#"<blockquote style="{}">${{1}}</blockquote>"#,
        styles.blockquote()
    );
    BLOCKQUOTE.replace_all(text, replacement.as_str()).into_owned()
}

/// Horizontal rules (stage 7): lines that are exactly `---`, `***`, or `___`.
pub(crate) fn substitute_rules(text: &str, styles: &Styles) -> String {
    let replacement = format!(r#"<hr style="{}">"#, styles.rule());
    RULE.replace_all(text, replacement.as_str()).into_owned()
}
