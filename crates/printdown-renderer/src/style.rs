//! Inline style generation for print-ready output.
//!
//! The output is rasterized by an external PDF pipeline with no stylesheet,
//! so every element carries its computed styles inline.

use crate::font::{FontRole, FontSettings};

/// Precomputed inline styles for one conversion.
#[derive(Debug)]
pub(crate) struct Styles {
    body_px: u32,
    heading_px: [u32; 6],
    code_px: u32,
    table_px: u32,
    family: &'static str,
}

impl Styles {
    pub(crate) fn new(fonts: &FontSettings) -> Self {
        let mut heading_px = [0; 6];
        for (i, px) in heading_px.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let level = (i + 1) as u8;
            *px = fonts.px(FontRole::Heading(level));
        }
        Self {
            body_px: fonts.px(FontRole::Body),
            heading_px,
            code_px: fonts.px(FontRole::Code),
            table_px: fonts.px(FontRole::Table),
            family: fonts.font_family.css(),
        }
    }

    /// Heading style. Levels 1 and 2 get a bottom border.
    pub(crate) fn heading(&self, level: usize) -> String {
        let px = self.heading_px[level - 1];
        let mut style = format!(
            "font-size:{px}px;font-family:{};font-weight:bold;margin:14px 0 6px;",
            self.family
        );
        if level <= 2 {
            style.push_str("border-bottom:1px solid #ddd;padding-bottom:4px;");
        }
        style
    }

    pub(crate) fn paragraph(&self) -> String {
        format!(
            "font-size:{}px;font-family:{};line-height:1.5;margin:6px 0;",
            self.body_px, self.family
        )
    }

    pub(crate) fn blockquote(&self) -> String {
        format!(
            "font-size:{}px;font-family:{};color:#666;border-left:3px solid #ccc;margin:8px 0;padding:2px 12px;",
            self.body_px, self.family
        )
    }

    pub(crate) fn list(&self) -> &'static str {
        "margin:8px 0;padding-left:24px;"
    }

    /// Task lists suppress bullets; the checkbox is the marker.
    pub(crate) fn task_list(&self) -> &'static str {
        "margin:8px 0;padding-left:8px;list-style:none;"
    }

    pub(crate) fn list_item(&self) -> String {
        format!(
            "font-size:{}px;font-family:{};line-height:1.5;",
            self.body_px, self.family
        )
    }

    pub(crate) fn inline_code(&self) -> String {
        format!(
            "font-size:{}px;font-family:monospace;background:#f0f0f0;border-radius:3px;padding:1px 4px;",
            self.code_px
        )
    }

    pub(crate) fn code_block_pre(&self) -> &'static str {
        "background:#f6f6f6;border:1px solid #e0e0e0;border-radius:4px;padding:8px 12px;overflow-x:auto;margin:0;"
    }

    pub(crate) fn code_block_text(&self) -> String {
        format!("font-size:{}px;font-family:monospace;", self.code_px)
    }

    pub(crate) fn code_label(&self) -> String {
        format!(
            "font-size:{}px;font-family:monospace;color:#888;margin-bottom:2px;",
            self.code_px
        )
    }

    pub(crate) fn table(&self) -> &'static str {
        "border-collapse:collapse;margin:12px 0;"
    }

    pub(crate) fn table_cell(&self, header: bool) -> String {
        let mut style = format!(
            "font-size:{}px;font-family:{};border:1px solid #ccc;padding:4px 8px;text-align:left;",
            self.table_px, self.family
        );
        if header {
            style.push_str("background:#f5f5f5;font-weight:bold;");
        }
        style
    }

    pub(crate) fn rule(&self) -> &'static str {
        "border:none;border-top:1px solid #ccc;margin:14px 0;"
    }

    pub(crate) fn diagram_label(&self) -> String {
        format!(
            "font-size:{}px;font-family:{};color:#8a6d00;margin-bottom:4px;",
            self.body_px, self.family
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontFamily, FontSize};

    fn styles(size: FontSize) -> Styles {
        Styles::new(&FontSettings {
            font_size: size,
            font_family: FontFamily::System,
        })
    }

    #[test]
    fn test_heading_sizes_scale() {
        let s = styles(FontSize::Large);
        assert!(s.heading(1).contains("font-size:21px"));
        let s = styles(FontSize::Small);
        assert!(s.heading(1).contains("font-size:15px"));
    }

    #[test]
    fn test_heading_border_levels() {
        let s = styles(FontSize::Medium);
        assert!(s.heading(1).contains("border-bottom"));
        assert!(s.heading(2).contains("border-bottom"));
        assert!(!s.heading(3).contains("border-bottom"));
        assert!(!s.heading(6).contains("border-bottom"));
    }

    #[test]
    fn test_code_and_table_share_base() {
        let s = styles(FontSize::Medium);
        assert!(s.inline_code().contains("font-size:9px"));
        assert!(s.table_cell(false).contains("font-size:9px"));
    }

    #[test]
    fn test_header_cell_has_background() {
        let s = styles(FontSize::Medium);
        assert!(s.table_cell(true).contains("background:#f5f5f5"));
        assert!(!s.table_cell(false).contains("background"));
    }
}
