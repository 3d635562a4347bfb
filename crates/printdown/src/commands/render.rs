//! `printdown render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use printdown_config::{CliSettings, Config};
use printdown_diagrams::KrokiClient;
use printdown_renderer::{FontFamily, FontSize, PrintRenderer, RenderResult};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    input: PathBuf,

    /// Output HTML file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover printdown.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Font size: small, medium or large (overrides config).
    #[arg(long)]
    font_size: Option<String>,

    /// Font family: system, serif or sans-serif (overrides config).
    #[arg(long)]
    font_family: Option<String>,

    /// Kroki server URL for diagram rendering (overrides config).
    #[arg(long)]
    kroki_url: Option<String>,

    /// Enable verbose output (show diagram rendering logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading the input or writing the
    /// output fails. Diagram failures are reported as warnings, not errors.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let font_size = self
            .font_size
            .as_deref()
            .map(|s| {
                FontSize::parse(s).ok_or_else(|| {
                    CliError::Validation(format!(
                        "invalid font size '{s}' (expected small, medium or large)"
                    ))
                })
            })
            .transpose()?;
        let font_family = self
            .font_family
            .as_deref()
            .map(|s| {
                FontFamily::parse(s).ok_or_else(|| {
                    CliError::Validation(format!(
                        "invalid font family '{s}' (expected system, serif or sans-serif)"
                    ))
                })
            })
            .transpose()?;

        let cli_settings = CliSettings {
            font_size,
            font_family,
            kroki_url: self.kroki_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown = std::fs::read_to_string(&self.input)?;

        let mut renderer = PrintRenderer::new().with_fonts(config.fonts);
        if let Some(kroki_url) = &config.diagrams_resolved.kroki_url {
            let client = KrokiClient::new(kroki_url)
                .with_config(config.diagrams_resolved.mermaid_config())
                .timeout(config.diagrams_resolved.timeout);
            renderer = renderer.with_diagram_renderer(client);
        }

        let RenderResult {
            html,
            diagram_failures,
        } = renderer.render(&markdown);
        tracing::info!(
            input = %self.input.display(),
            bytes = html.len(),
            failures = diagram_failures.len(),
            "rendered document"
        );

        for failure in &diagram_failures {
            output.warning(&format!(
                "Diagram {} could not be rendered: {}",
                failure.index + 1,
                failure.message
            ));
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
