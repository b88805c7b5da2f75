//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the weather-condition table and errors live here. Dependencies flow inward.

pub mod conditions;
pub mod entities;
pub mod errors;

pub use conditions::{CONDITION_LABELS, UNKNOWN_CONDITION, condition_label};
pub use entities::{Coordinates, PlaceQuery, WeatherObservation};
pub use errors::DomainError;
