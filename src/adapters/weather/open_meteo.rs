//! Open-Meteo adapter. Implements WeatherPort via the `/v1/forecast` endpoint.
//!
//! Only the `current` block is requested; forecast and history are out of scope.

use crate::adapters::http::snippet;
use crate::domain::{Coordinates, DomainError, WeatherObservation};
use crate::ports::WeatherPort;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

/// Fields requested in the `current` block.
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Current-conditions client for an Open-Meteo compatible forecast endpoint.
pub struct OpenMeteoAdapter {
    client: Client,
    forecast_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    #[serde(deserialize_with = "whole_number")]
    weather_code: i64,
    wind_speed_10m: f64,
}

/// Accepts `3` as well as `3.0`; a fractional or non-finite code is a decode error.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(serde::de::Error::custom(format!(
            "weather_code {} is not a whole number",
            value
        )))
    }
}

impl From<CurrentBlock> for WeatherObservation {
    fn from(c: CurrentBlock) -> Self {
        Self {
            temperature: c.temperature_2m,
            humidity: c.relative_humidity_2m,
            wind_speed: c.wind_speed_10m,
            weather_code: c.weather_code,
        }
    }
}

impl OpenMeteoAdapter {
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `forecast_url` - Full forecast endpoint, e.g. "https://api.open-meteo.com/v1/forecast"
    pub fn new(client: Client, forecast_url: impl Into<String>) -> Self {
        Self {
            client,
            forecast_url: forecast_url.into(),
        }
    }

    async fn fetch_current(
        &self,
        coordinates: &Coordinates,
    ) -> Result<WeatherObservation, DomainError> {
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("weather request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(text) => snippet(&text),
                Err(e) => format!("<body unreadable: {}>", e),
            };
            return Err(DomainError::Service(format!(
                "weather API error {}: {}",
                status, detail
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("reading weather response: {}", e)))?;

        let forecast: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::Decode(format!("weather response: {} ({})", e, snippet(&body)))
        })?;

        Ok(forecast.current.into())
    }
}

#[async_trait::async_trait]
impl WeatherPort for OpenMeteoAdapter {
    async fn current_weather(&self, coordinates: &Coordinates) -> Option<WeatherObservation> {
        match self.fetch_current(coordinates).await {
            Ok(observation) => {
                debug!(
                    lat = coordinates.latitude,
                    lon = coordinates.longitude,
                    temperature = observation.temperature,
                    weather_code = observation.weather_code,
                    "current weather fetched"
                );
                Some(observation)
            }
            Err(e) => {
                warn!(
                    lat = coordinates.latitude,
                    lon = coordinates.longitude,
                    error = %e,
                    "weather fetch failed"
                );
                None
            }
        }
    }
}
