//! Kroki-backed mermaid renderer.
//!
//! Sends diagram source to a Kroki server via HTTP POST and returns the
//! rendered SVG. Requests are synchronous and issued one at a time by the
//! caller, which keeps output deterministic for a given document.

use std::time::Duration;

use printdown_renderer::{DiagramError, DiagramRenderer};
use tracing::debug;
use ureq::Agent;

use crate::config::MermaidConfig;
use crate::consts::DEFAULT_TIMEOUT;

/// Create HTTP agent with the specified timeout.
fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Mermaid renderer backed by a Kroki server.
///
/// # Example
///
/// ```no_run
/// use printdown_diagrams::KrokiClient;
/// use printdown_renderer::PrintRenderer;
///
/// let client = KrokiClient::new("https://kroki.io");
/// let mut renderer = PrintRenderer::new().with_diagram_renderer(client);
/// ```
pub struct KrokiClient {
    base_url: String,
    config: MermaidConfig,
    timeout: Duration,
    agent: Agent,
    initialized: bool,
}

impl KrokiClient {
    /// Create a client for the given Kroki server URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            config: MermaidConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            agent: create_agent(DEFAULT_TIMEOUT),
            initialized: false,
        }
    }

    /// Set the mermaid rendering options.
    #[must_use]
    pub fn with_config(mut self, config: MermaidConfig) -> Self {
        self.config = config;
        self
    }

    /// Set HTTP timeout for Kroki requests.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.agent = create_agent(timeout);
        self
    }

    fn post_svg(&self, source: &str) -> Result<String, DiagramError> {
        let url = format!("{}/mermaid/svg", self.base_url);

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "text/plain")
            .send(source.as_bytes())
            .map_err(|e| DiagramError::Render(format!("HTTP error: {e}")))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(DiagramError::Render(format!("HTTP {status}: {error_body}")));
        }

        body.read_to_string()
            .map_err(|e| DiagramError::Render(format!("I/O error: {e}")))
    }
}

impl DiagramRenderer for KrokiClient {
    /// Validate the configured server URL. Idempotent: repeated calls after
    /// a successful one are no-ops.
    fn init(&mut self) -> Result<(), DiagramError> {
        if self.initialized {
            return Ok(());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(DiagramError::Unavailable(format!(
                "Kroki URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.initialized = true;
        Ok(())
    }

    fn render(&mut self, id: &str, source: &str) -> Result<String, DiagramError> {
        let prepared = self.config.apply(source);
        debug!(id, bytes = prepared.len(), "rendering diagram via Kroki");
        let svg = self.post_svg(&prepared)?;
        if svg.is_empty() {
            return Err(DiagramError::Render("empty response body".to_owned()));
        }
        Ok(svg)
    }
}
