//! Compile-time Nominatim service configuration.
//!
//! The defaults live in `services/nominatim.toml` and are embedded at
//! compile time. `NOMINATIM_BASE_URL` and `NOMINATIM_USER_AGENT` override
//! them at runtime, e.g. to point at a self-hosted instance.

use std::time::Duration;

use serde::Deserialize;

/// Nominatim settings loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NominatimService {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Search endpoint (e.g. `"https://nominatim.openstreetmap.org/search"`).
    pub base_url: String,
    /// ISO country code used to restrict results.
    pub country_code: String,
    /// User-Agent sent with every request; the public instance rejects
    /// requests without one.
    pub user_agent: String,
    /// Minimum delay between requests in milliseconds.
    pub rate_limit_ms: u64,
}

const NOMINATIM_TOML: &str = include_str!("../services/nominatim.toml");

impl NominatimService {
    /// The embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (this is a compile-time
    /// guarantee since the config is embedded).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(NOMINATIM_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse geocoding service 'nominatim': {e}"))
    }

    /// The embedded configuration with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::embedded().with_overrides(
            std::env::var("NOMINATIM_BASE_URL").ok(),
            std::env::var("NOMINATIM_USER_AGENT").ok(),
        )
    }

    /// Replaces base URL and User-Agent where an override is given and
    /// non-empty.
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, user_agent: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|s| !s.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(agent) = user_agent.filter(|s| !s.trim().is_empty()) {
            self.user_agent = agent;
        }
        self
    }

    /// Minimum spacing between two requests.
    #[must_use]
    pub const fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }
}
