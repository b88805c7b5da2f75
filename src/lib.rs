//! city-weather: look up current conditions for a city, with Hexagonal Architecture.
//!
//! Flow: place name → Nominatim (coordinates) → Open-Meteo (current weather)
//! → condition label → presentation surface.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
