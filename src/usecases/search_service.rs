//! Search flow: validate → geocode → fetch weather → render.
//!
//! - Empty input is rejected before any network call
//! - The geocoder completes before the weather fetch starts
//! - Every failure ends the cycle with one alert on the presentation surface

use crate::domain::PlaceQuery;
use crate::ports::{GeocoderPort, PresentationPort, WeatherPort};
use crate::usecases::renderer::render_weather;
use std::sync::Arc;
use tracing::{debug, info};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name.";
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";
pub const WEATHER_UNAVAILABLE_MESSAGE: &str = "Unable to fetch weather data. Please try again.";

/// How a search cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Weather was written to the surface.
    Rendered,
    /// Trimmed input was empty; nothing was requested.
    EmptyQuery,
    /// Geocoder had no result; weather was not requested.
    CityNotFound,
    /// Weather fetcher had no result.
    WeatherUnavailable,
}

impl SearchOutcome {
    /// Alert shown to the user for this outcome, if any.
    pub fn alert(self) -> Option<&'static str> {
        match self {
            Self::Rendered => None,
            Self::EmptyQuery => Some(EMPTY_QUERY_MESSAGE),
            Self::CityNotFound => Some(CITY_NOT_FOUND_MESSAGE),
            Self::WeatherUnavailable => Some(WEATHER_UNAVAILABLE_MESSAGE),
        }
    }
}

/// Search service. Wires one user action to geocoder, weather fetcher and renderer.
///
/// Holds no per-search state. Overlapping calls are not guarded against: both
/// cycles write the same surface and the later one wins.
pub struct SearchService {
    geocoder: Arc<dyn GeocoderPort>,
    weather: Arc<dyn WeatherPort>,
    surface: Arc<dyn PresentationPort>,
}

impl SearchService {
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        weather: Arc<dyn WeatherPort>,
        surface: Arc<dyn PresentationPort>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            surface,
        }
    }

    /// Run one search cycle for the raw text the user submitted.
    pub async fn search(&self, raw_input: &str) -> SearchOutcome {
        let outcome = match self.run(raw_input).await {
            Ok(()) => SearchOutcome::Rendered,
            Err(rejected) => rejected,
        };
        if let Some(message) = outcome.alert() {
            self.surface.alert(message);
        }
        info!(?outcome, "search cycle finished");
        outcome
    }

    async fn run(&self, raw_input: &str) -> Result<(), SearchOutcome> {
        debug!(input = raw_input, "validating");
        let place = PlaceQuery::new(raw_input).map_err(|_| SearchOutcome::EmptyQuery)?;

        debug!(place = %place, "geocoding");
        let coordinates = self
            .geocoder
            .geocode(&place)
            .await
            .ok_or(SearchOutcome::CityNotFound)?;

        debug!(
            place = %place,
            lat = coordinates.latitude,
            lon = coordinates.longitude,
            "fetching weather"
        );
        let observation = self
            .weather
            .current_weather(&coordinates)
            .await
            .ok_or(SearchOutcome::WeatherUnavailable)?;

        debug!(place = %place, "rendering");
        render_weather(self.surface.as_ref(), Some(&observation), place.as_str());
        Ok(())
    }
}
