//! Weather adapters. Implement WeatherPort.

pub mod open_meteo;

pub use open_meteo::OpenMeteoAdapter;
