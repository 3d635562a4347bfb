//! Mermaid diagram rendering via Kroki.
//!
//! Provides [`KrokiClient`], an implementation of the
//! [`DiagramRenderer`](printdown_renderer::DiagramRenderer) trait that sends
//! mermaid source to a Kroki server and returns rendered SVG, plus the
//! [`MermaidConfig`] options (theme, security level) injected into each
//! diagram as an `%%{init}%%` directive.

mod config;
mod consts;
mod kroki;

pub use config::{MermaidConfig, MermaidTheme, SecurityLevel};
pub use consts::DEFAULT_TIMEOUT;
pub use kroki::KrokiClient;
