//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Lookups return `Option`: adapters log what went
//! wrong and hand back "no result", never an error object.

use crate::domain::{Coordinates, PlaceQuery, WeatherObservation};

/// Number of list rows on the presentation surface: humidity, wind speed, condition.
pub const LIST_ITEM_COUNT: usize = 3;

/// Place name → coordinates.
#[async_trait::async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve the first candidate for `place`. `None` when the lookup failed
    /// or the service had no match. Single attempt, no retry.
    async fn geocode(&self, place: &PlaceQuery) -> Option<Coordinates>;
}

/// Coordinates → current conditions.
#[async_trait::async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current temperature, humidity, weather code and wind speed.
    /// `None` on transport failure, non-success status or an unreadable body.
    async fn current_weather(&self, coordinates: &Coordinates) -> Option<WeatherObservation>;
}

/// Display surface the search flow writes into: a title, a temperature line,
/// [`LIST_ITEM_COUNT`] positional list rows, and user-facing alerts.
///
/// Writes are synchronous; implementations keep their state behind interior mutability.
pub trait PresentationPort: Send + Sync {
    fn set_title(&self, text: &str);

    fn set_temperature(&self, text: &str);

    /// Replace list row `index` (`0..LIST_ITEM_COUNT`). Out-of-range indices are ignored.
    fn set_list_item(&self, index: usize, text: &str);

    /// Show a notification to the user.
    fn alert(&self, message: &str);
}
