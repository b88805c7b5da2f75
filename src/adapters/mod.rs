//! Infrastructure adapters. Implement ports.
//!
//! Nominatim, Open-Meteo, terminal UI. Map errors to DomainError.

pub mod geocoding;
pub mod http;
pub mod ui;
pub mod weather;
