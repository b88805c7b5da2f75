//! Domain entities. Pure, request-scoped data for one search cycle.
//!
//! No HTTP/serde wire types here. Those are mapped from adapters.

use super::errors::DomainError;
use std::fmt;

/// A place name typed by the user. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Trims surrounding whitespace and rejects what is left if it is empty.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("place name is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decimal-degree position resolved by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    /// °C
    pub temperature: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    pub wind_speed: f64,
    /// WMO weather code; see [`crate::domain::condition_label`].
    pub weather_code: i64,
}
