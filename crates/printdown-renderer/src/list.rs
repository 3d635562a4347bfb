//! List processing (stage 8): a single pass over lines with an explicit
//! open-list state machine.
//!
//! Runs before emphasis so `*` bullet markers are never read as emphasis.
//! Nesting is not supported; indentation is not interpreted.

use std::sync::LazyLock;

use regex::Regex;

use crate::style::Styles;

static TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[([ xX])\] (.*)$").unwrap());

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. (.*)$").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+] (.*)$").unwrap());

/// Kind of list currently open. A change of kind closes the open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Task,
    Ordered,
    Unordered,
}

impl ListKind {
    fn open_tag(self, styles: &Styles) -> String {
        match self {
            Self::Task => format!(r#"<ul style="{}">"#, styles.task_list()),
            Self::Ordered => format!(r#"<ol style="{}">"#, styles.list()),
            Self::Unordered => format!(r#"<ul style="{}">"#, styles.list()),
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Ordered => "</ol>",
            Self::Task | Self::Unordered => "</ul>",
        }
    }
}

/// Classify a line as a list item, rendering the `<li>` if it is one.
///
/// Task items are checked first: `- [ ]` would otherwise match the
/// unordered pattern.
fn classify(line: &str, styles: &Styles) -> Option<(ListKind, String)> {
    if let Some(caps) = TASK_ITEM.captures(line) {
        let checked = if &caps[1] == " " { "" } else { " checked" };
        let item = format!(
            r#"<li style="{}"><input type="checkbox"{checked} disabled> {}</li>"#,
            styles.list_item(),
            &caps[2]
        );
        return Some((ListKind::Task, item));
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        let item = format!(r#"<li style="{}">{}</li>"#, styles.list_item(), &caps[1]);
        return Some((ListKind::Ordered, item));
    }
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        let item = format!(r#"<li style="{}">{}</li>"#, styles.list_item(), &caps[1]);
        return Some((ListKind::Unordered, item));
    }
    None
}

/// Wrap consecutive same-kind items in one container; close on kind change
/// or any non-item line.
pub(crate) fn process_lists(text: &str, styles: &Styles) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open: Option<ListKind> = None;

    for line in text.split('\n') {
        match classify(line, styles) {
            Some((kind, item)) => {
                if open != Some(kind) {
                    if let Some(previous) = open {
                        out.push(previous.close_tag().to_owned());
                    }
                    out.push(kind.open_tag(styles));
                    open = Some(kind);
                }
                out.push(item);
            }
            None => {
                if let Some(previous) = open.take() {
                    out.push(previous.close_tag().to_owned());
                }
                out.push(line.to_owned());
            }
        }
    }
    if let Some(previous) = open {
        out.push(previous.close_tag().to_owned());
    }

    out.join("\n")
}
