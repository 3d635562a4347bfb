//! Placeholder tokens for content that must bypass the substitution stages.
//!
//! Fenced code and diagram blocks are lifted out of the working text before
//! any substitution runs and spliced back in afterwards. The token shape
//! cannot survive inside remaining markdown: extraction removes every fence
//! body before the first token is inserted.

use std::collections::HashMap;

const CODE_PREFIX: &str = "<<<CODEBLOCK";
const MERMAID_PREFIX: &str = "<<<MERMAID";
const SUFFIX: &str = ">>>";

/// Placeholder token for an extracted generic code block.
pub(crate) fn code_token(index: usize) -> String {
    format!("{CODE_PREFIX}{index}{SUFFIX}")
}

/// Placeholder token for an extracted mermaid block.
pub(crate) fn mermaid_token(index: usize) -> String {
    format!("{MERMAID_PREFIX}{index}{SUFFIX}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Code,
    Mermaid,
}

/// Collected token replacements applied in one scan pass.
///
/// Replacing each placeholder with repeated global find/replace would rescan
/// the document once per block and risks matching text introduced by earlier
/// replacements. A single left-to-right pass does neither.
#[derive(Debug, Default)]
pub(crate) struct Replacements {
    code: HashMap<usize, String>,
    mermaid: HashMap<usize, String>,
}

impl Replacements {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            code: HashMap::with_capacity(capacity),
            mermaid: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn add_code(&mut self, index: usize, html: String) {
        self.code.insert(index, html);
    }

    pub(crate) fn add_mermaid(&mut self, index: usize, html: String) {
        self.mermaid.insert(index, html);
    }

    /// Replace every known placeholder in a single pass.
    ///
    /// Unknown or malformed tokens are kept verbatim.
    pub(crate) fn apply(self, html: &mut String) {
        if self.code.is_empty() && self.mermaid.is_empty() {
            return;
        }

        let mut result = String::with_capacity(html.len());
        let mut remaining = html.as_str();

        while let Some(start) = remaining.find("<<<") {
            result.push_str(&remaining[..start]);
            let rest = &remaining[start..];

            if let Some((kind, index, token_len)) = parse_token(rest) {
                let replacement = match kind {
                    TokenKind::Code => self.code.get(&index),
                    TokenKind::Mermaid => self.mermaid.get(&index),
                };
                if let Some(content) = replacement {
                    result.push_str(content);
                } else {
                    result.push_str(&rest[..token_len]);
                }
                remaining = &rest[token_len..];
            } else {
                result.push_str("<<<");
                remaining = &rest[3..];
            }
        }

        result.push_str(remaining);
        *html = result;
    }
}

/// Parse a placeholder token at the start of `s`.
///
/// Returns the token kind, index, and total token length in bytes.
fn parse_token(s: &str) -> Option<(TokenKind, usize, usize)> {
    let (kind, prefix_len, body) = if let Some(body) = s.strip_prefix(CODE_PREFIX) {
        (TokenKind::Code, CODE_PREFIX.len(), body)
    } else if let Some(body) = s.strip_prefix(MERMAID_PREFIX) {
        (TokenKind::Mermaid, MERMAID_PREFIX.len(), body)
    } else {
        return None;
    };

    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with(SUFFIX) {
        return None;
    }
    let index = body[..digits].parse().ok()?;
    Some((kind, index, prefix_len + digits + SUFFIX.len()))
}
