use std::sync::Arc;

use crate::config::Config;
use crate::parsing::DocumentDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable decoder. Default: FileDecoder.
    pub decoder: Arc<dyn DocumentDecoder>,
}
