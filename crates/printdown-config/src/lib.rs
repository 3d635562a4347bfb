//! Configuration management for printdown.
//!
//! Parses `printdown.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use printdown_diagrams::{DEFAULT_TIMEOUT, MermaidConfig, MermaidTheme, SecurityLevel};
use printdown_renderer::{FontFamily, FontSettings, FontSize};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override font size.
    pub font_size: Option<FontSize>,
    /// Override font family.
    pub font_family: Option<FontFamily>,
    /// Override Kroki URL for diagram rendering.
    pub kroki_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "printdown.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font configuration.
    pub fonts: FontSettings,
    /// Diagram rendering configuration (optional section).
    /// When present, `kroki_url` is required.
    diagrams: Option<DiagramsConfigRaw>,

    /// Resolved diagrams configuration (set after loading).
    #[serde(skip)]
    pub diagrams_resolved: DiagramsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw diagrams configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DiagramsConfigRaw {
    kroki_url: Option<String>,
    theme: Option<String>,
    security_level: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved diagram rendering configuration.
#[derive(Debug)]
pub struct DiagramsConfig {
    /// Kroki server URL for diagram rendering. `None` disables rendering.
    pub kroki_url: Option<String>,
    /// Mermaid color theme.
    pub theme: MermaidTheme,
    /// Mermaid security level.
    pub security_level: SecurityLevel,
    /// HTTP timeout for Kroki requests.
    pub timeout: Duration,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            kroki_url: None,
            theme: MermaidTheme::default(),
            security_level: SecurityLevel::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DiagramsConfig {
    /// Mermaid rendering options for the diagram client.
    #[must_use]
    pub fn mermaid_config(&self) -> MermaidConfig {
        MermaidConfig {
            theme: self.theme,
            security_level: self.security_level,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `printdown.toml` in current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(font_size) = settings.font_size {
            self.fonts.font_size = font_size;
        }
        if let Some(font_family) = settings.font_family {
            self.fonts.font_family = font_family;
        }
        if let Some(kroki_url) = &settings.kroki_url {
            self.diagrams_resolved.kroki_url = Some(kroki_url.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_diagrams()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Resolve the raw `[diagrams]` section, if present.
    ///
    /// Validates that `kroki_url` is provided when the section exists and
    /// that theme and security level name known values.
    fn resolve_diagrams(&mut self) -> Result<(), ConfigError> {
        self.diagrams_resolved = match &self.diagrams {
            Some(diagrams) => {
                let kroki_url = diagrams.kroki_url.clone().ok_or_else(|| {
                    ConfigError::Validation(
                        "[diagrams] section requires kroki_url to be set".to_owned(),
                    )
                })?;
                let theme = match &diagrams.theme {
                    Some(name) => MermaidTheme::parse(name).ok_or_else(|| {
                        ConfigError::Validation(format!("unknown diagrams.theme '{name}'"))
                    })?,
                    None => MermaidTheme::default(),
                };
                let security_level = match &diagrams.security_level {
                    Some(name) => SecurityLevel::parse(name).ok_or_else(|| {
                        ConfigError::Validation(format!(
                            "unknown diagrams.security_level '{name}'"
                        ))
                    })?,
                    None => SecurityLevel::default(),
                };
                DiagramsConfig {
                    kroki_url: Some(kroki_url),
                    theme,
                    security_level,
                    timeout: diagrams
                        .timeout_secs
                        .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
                }
            }
            None => DiagramsConfig::default(),
        };
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref kroki_url) = self.diagrams_resolved.kroki_url {
            require_non_empty(kroki_url, "diagrams.kroki_url")?;
            require_http_url(kroki_url, "diagrams.kroki_url")?;
        }
        if self.diagrams_resolved.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "diagrams.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
