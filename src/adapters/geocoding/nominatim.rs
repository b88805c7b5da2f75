//! Nominatim (OpenStreetMap) adapter. Implements GeocoderPort via the `/search` endpoint.

use crate::adapters::http::snippet;
use crate::domain::{Coordinates, DomainError, PlaceQuery};
use crate::ports::GeocoderPort;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Forward geocoder backed by a Nominatim-compatible search endpoint.
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

/// One search candidate. Nominatim reports coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    /// # Arguments
    /// * `client` - Shared HTTP client (carries the User-Agent Nominatim requires)
    /// * `search_url` - Full search endpoint, e.g. "https://nominatim.openstreetmap.org/search"
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    async fn search(&self, place: &PlaceQuery) -> Result<Coordinates, DomainError> {
        // reqwest percent-encodes the query pairs
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("format", "json"), ("q", place.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("geocoding request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("reading geocoding response: {}", e)))?;

        if !status.is_success() {
            return Err(DomainError::Service(format!(
                "geocoding API error {}: {}",
                status,
                snippet(&body)
            )));
        }

        let candidates: Vec<NominatimPlace> = serde_json::from_str(&body).map_err(|e| {
            DomainError::Decode(format!("geocoding response: {} ({})", e, snippet(&body)))
        })?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("no match for '{}'", place)))?;

        debug!(
            place = %place,
            display_name = first.display_name.as_deref().unwrap_or(""),
            lat = %first.lat,
            lon = %first.lon,
            "geocoding candidate selected"
        );

        parse_coordinates(&first.lat, &first.lon)
    }
}

fn parse_coordinates(lat: &str, lon: &str) -> Result<Coordinates, DomainError> {
    // f64 parsing accepts "NaN" and "inf"; only finite degrees within range are coordinates
    let parse = |value: &str, field: &str, limit: f64| -> Result<f64, DomainError> {
        let degrees = value
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::Decode(format!("{} '{}': {}", field, value, e)))?;
        if !degrees.is_finite() || degrees.abs() > limit {
            return Err(DomainError::Decode(format!(
                "{} '{}' is not within ±{}",
                field, value, limit
            )));
        }
        Ok(degrees)
    };
    Ok(Coordinates {
        latitude: parse(lat, "lat", 90.0)?,
        longitude: parse(lon, "lon", 180.0)?,
    })
}

#[async_trait::async_trait]
impl GeocoderPort for NominatimGeocoder {
    async fn geocode(&self, place: &PlaceQuery) -> Option<Coordinates> {
        match self.search(place).await {
            Ok(coordinates) => Some(coordinates),
            Err(e) => {
                warn!(place = %place, error = %e, "geocoding failed");
                None
            }
        }
    }
}
