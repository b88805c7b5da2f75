//! Geocoding adapters. Implement GeocoderPort.

pub mod nominatim;

pub use nominatim::NominatimGeocoder;
