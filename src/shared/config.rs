//! Application configuration. Service endpoints, HTTP client settings.

use serde::Deserialize;
use std::time::Duration;

/// Nominatim (OpenStreetMap) search endpoint. Free, no API key required.
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Open-Meteo forecast endpoint. Free, no API key required.
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Geocoding search endpoint. Read from CITY_WEATHER_GEOCODING_URL.
    #[serde(default)]
    pub geocoding_url: Option<String>,

    /// Weather forecast endpoint. Read from CITY_WEATHER_WEATHER_URL.
    #[serde(default)]
    pub weather_url: Option<String>,

    /// User-Agent sent with every request (Nominatim rejects anonymous clients).
    /// Read from CITY_WEATHER_USER_AGENT.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds. Unset means requests may wait indefinitely.
    /// Read from CITY_WEATHER_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CITY_WEATHER"));
        if let Ok(path) = std::env::var("CITY_WEATHER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the geocoding endpoint. Defaults to Nominatim search.
    pub fn geocoding_url_or_default(&self) -> String {
        self.geocoding_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_string())
    }

    /// Returns the forecast endpoint. Defaults to Open-Meteo.
    pub fn weather_url_or_default(&self) -> String {
        self.weather_url
            .clone()
            .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string())
    }

    /// Returns the User-Agent. Defaults to "city-weather/<crate version>".
    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| format!("city-weather/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Returns the request timeout, or `None` when no timeout is configured (or it is 0).
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
