//! Font settings and pixel size computation for print output.
//!
//! All element sizes derive from a fixed base-size table scaled by a
//! per-setting multiplier, rounded to the nearest integer pixel.

/// Display font size setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Parse from a setting value.
    ///
    /// Returns `None` if the value is not a supported size.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Scaling multiplier applied to every base size.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Small => 0.85,
            Self::Medium => 1.0,
            Self::Large => 1.15,
        }
    }
}

/// Display font family setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontFamily {
    #[default]
    System,
    Serif,
    SansSerif,
}

impl FontFamily {
    /// Parse from a setting value.
    ///
    /// Returns `None` if the value is not a supported family.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Self::System),
            "serif" => Some(Self::Serif),
            "sans-serif" => Some(Self::SansSerif),
            _ => None,
        }
    }

    /// CSS `font-family` value for inline styles.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::System => "-apple-system,'Segoe UI',Roboto,sans-serif",
            Self::Serif => "Georgia,'Times New Roman',serif",
            Self::SansSerif => "Arial,Helvetica,sans-serif",
        }
    }
}

/// Text roles with fixed base pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Body,
    Heading(u8),
    Code,
    Table,
}

impl FontRole {
    /// Base size in pixels before scaling.
    fn base_px(self) -> f32 {
        match self {
            Self::Body => 11.0,
            Self::Heading(1) => 18.0,
            Self::Heading(2) => 15.0,
            Self::Heading(3) => 13.0,
            Self::Heading(4) => 12.0,
            Self::Heading(5) => 11.0,
            // Level 6 and anything deeper.
            Self::Heading(_) => 10.0,
            Self::Code | Self::Table => 9.0,
        }
    }
}

/// Font configuration for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontSettings {
    /// Overall size setting, scales every element.
    #[cfg_attr(feature = "serde", serde(rename = "size"))]
    pub font_size: FontSize,
    /// Font family for non-code text.
    #[cfg_attr(feature = "serde", serde(rename = "family"))]
    pub font_family: FontFamily,
}

impl FontSettings {
    /// Computed pixel size for a text role, rounded to the nearest integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn px(&self, role: FontRole) -> u32 {
        (role.base_px() * self.font_size.multiplier()).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(size: FontSize) -> FontSettings {
        FontSettings {
            font_size: size,
            font_family: FontFamily::System,
        }
    }

    #[test]
    fn test_medium_is_base_table() {
        let s = settings(FontSize::Medium);
        assert_eq!(s.px(FontRole::Body), 11);
        assert_eq!(s.px(FontRole::Heading(1)), 18);
        assert_eq!(s.px(FontRole::Heading(2)), 15);
        assert_eq!(s.px(FontRole::Heading(3)), 13);
        assert_eq!(s.px(FontRole::Heading(4)), 12);
        assert_eq!(s.px(FontRole::Heading(5)), 11);
        assert_eq!(s.px(FontRole::Heading(6)), 10);
        assert_eq!(s.px(FontRole::Code), 9);
        assert_eq!(s.px(FontRole::Table), 9);
    }

    #[test]
    fn test_large_rounds_to_nearest() {
        let s = settings(FontSize::Large);
        // 18 * 1.15 = 20.7 -> 21
        assert_eq!(s.px(FontRole::Heading(1)), 21);
        // 15 * 1.15 = 17.25 -> 17
        assert_eq!(s.px(FontRole::Heading(2)), 17);
        // 13 * 1.15 = 14.95 -> 15
        assert_eq!(s.px(FontRole::Heading(3)), 15);
        // 11 * 1.15 = 12.65 -> 13
        assert_eq!(s.px(FontRole::Body), 13);
        // 9 * 1.15 = 10.35 -> 10
        assert_eq!(s.px(FontRole::Code), 10);
    }

    #[test]
    fn test_small_rounds_to_nearest() {
        let s = settings(FontSize::Small);
        // 18 * 0.85 = 15.3 -> 15
        assert_eq!(s.px(FontRole::Heading(1)), 15);
        // 15 * 0.85 = 12.75 -> 13
        assert_eq!(s.px(FontRole::Heading(2)), 13);
        // 11 * 0.85 = 9.35 -> 9
        assert_eq!(s.px(FontRole::Body), 9);
        // 9 * 0.85 = 7.65 -> 8
        assert_eq!(s.px(FontRole::Table), 8);
    }

    #[test]
    fn test_parse_font_size() {
        assert_eq!(FontSize::parse("small"), Some(FontSize::Small));
        assert_eq!(FontSize::parse("medium"), Some(FontSize::Medium));
        assert_eq!(FontSize::parse("large"), Some(FontSize::Large));
        assert_eq!(FontSize::parse("huge"), None);
        assert_eq!(FontSize::parse("Small"), None);
    }

    #[test]
    fn test_parse_font_family() {
        assert_eq!(FontFamily::parse("system"), Some(FontFamily::System));
        assert_eq!(FontFamily::parse("serif"), Some(FontFamily::Serif));
        assert_eq!(FontFamily::parse("sans-serif"), Some(FontFamily::SansSerif));
        assert_eq!(FontFamily::parse("monospace"), None);
    }

    #[test]
    fn test_default_settings() {
        let s = FontSettings::default();
        assert_eq!(s.font_size, FontSize::Medium);
        assert_eq!(s.font_family, FontFamily::System);
    }

    #[test]
    fn test_family_css_values() {
        assert!(FontFamily::System.css().contains("-apple-system"));
        assert!(FontFamily::Serif.css().contains("Georgia"));
        assert!(FontFamily::SansSerif.css().contains("Arial"));
    }
}
