use std::sync::Arc;

use roster_core::constants::api;
use roster_model::ImageUrlTemplate;

use crate::runtime_config::RuntimeConfig;
use crate::state::RosterState;

/// Environment variables consulted by [`AppConfig::from_environment`] for
/// [`RuntimeConfig`] overrides.
pub const RUNTIME_KEYS: [&str; 7] = [
    "ROSTER_CATALOG_LIMIT",
    "ROSTER_ITEM_WIDTH",
    "ROSTER_VIEWPORT_WIDTH",
    "ROSTER_MAX_DIMENSION",
    "ROSTER_SAMPLE_STEP",
    "ROSTER_QUANT_BITS",
    "ROSTER_FLAT_BACKGROUND",
];

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub image_template: ImageUrlTemplate,
    pub runtime: RuntimeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(api::BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Arc::from(api_url.into()),
            image_template: ImageUrlTemplate::default(),
            runtime: RuntimeConfig::default(),
        }
    }

    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; `from_environment` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("ROSTER_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| api::BASE_URL.to_string());
        let mut config = Self::new(api_url);

        if let Some(template) = lookup("ROSTER_IMAGE_TEMPLATE").filter(|t| !t.trim().is_empty()) {
            config.image_template = ImageUrlTemplate::new(template.trim());
        }
        for key in RUNTIME_KEYS {
            if let Some(raw) = lookup(key) {
                config.runtime.apply(key, &raw);
            }
        }
        config
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn with_runtime(mut self, runtime: RuntimeConfig) -> Self {
        self.runtime = runtime;
        self
    }
}

/// Initial host state for a config.
pub fn base_state(config: &AppConfig) -> RosterState {
    RosterState::new(config.runtime.layout())
}
