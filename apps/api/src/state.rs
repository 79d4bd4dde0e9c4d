use crate::config::Config;
use crate::layout::LayoutConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Character budget used by every pagination request.
    pub layout: LayoutConfig,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            layout: config.layout_config(),
        }
    }
}
