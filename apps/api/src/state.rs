use std::sync::Arc;

use crate::config::Config;
use crate::polish::Polisher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The render path is pure and takes nothing from here; state only carries the
/// polish backend and configuration.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration, kept for handlers that need it later.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable polish backend. `LlmPolisher` when an API key is configured,
    /// `EchoPolisher` otherwise.
    pub polisher: Arc<dyn Polisher>,
}
