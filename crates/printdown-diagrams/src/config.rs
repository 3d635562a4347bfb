//! Mermaid rendering configuration.
//!
//! Theme and security level are injected into diagram source as an
//! `%%{init: ...}%%` directive, which mermaid honors regardless of how the
//! rendering service is configured.

/// Mermaid color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MermaidTheme {
    #[default]
    Default,
    Dark,
    Forest,
    Neutral,
}

impl MermaidTheme {
    /// Parse a theme name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "dark" => Some(Self::Dark),
            "forest" => Some(Self::Forest),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Forest => "forest",
            Self::Neutral => "neutral",
        }
    }
}

/// Mermaid security level, controlling what diagram source may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityLevel {
    /// Tags encoded, clicks disabled. The safe default for untrusted input.
    #[default]
    Strict,
    Loose,
    Antiscript,
    Sandbox,
}

impl SecurityLevel {
    /// Parse a security level name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "loose" => Some(Self::Loose),
            "antiscript" => Some(Self::Antiscript),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
            Self::Antiscript => "antiscript",
            Self::Sandbox => "sandbox",
        }
    }
}

/// Rendering options applied to every diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MermaidConfig {
    pub theme: MermaidTheme,
    pub security_level: SecurityLevel,
}

impl MermaidConfig {
    /// Build the `%%{init}%%` directive for these options, or `None` when
    /// everything is at its default and the source can go through untouched.
    #[must_use]
    pub(crate) fn init_directive(self) -> Option<String> {
        if self == Self::default() {
            return None;
        }
        Some(format!(
            r#"%%{{init: {{"theme": "{}", "securityLevel": "{}"}}}}%%"#,
            self.theme.as_str(),
            self.security_level.as_str(),
        ))
    }

    /// Prepend the init directive to diagram source when one is needed.
    ///
    /// Source that already carries its own `%%{init` directive wins; the
    /// author's explicit choice is not overridden.
    #[must_use]
    pub(crate) fn apply(self, source: &str) -> String {
        match self.init_directive() {
            Some(directive) if !source.trim_start().starts_with("%%{init") => {
                format!("{directive}\n{source}")
            }
            _ => source.to_owned(),
        }
    }
}
