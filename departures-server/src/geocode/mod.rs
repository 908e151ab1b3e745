//! Street-address geocoder client.
//!
//! Resolves a free-text address to coordinates by calling the external
//! geocoding provider's one-line-address endpoint and taking the first
//! match. No validation happens locally; an address is "valid" exactly
//! when the provider returns a match for it.

mod client;
mod error;
mod types;

pub use client::{GeocoderClient, GeocoderConfig};
pub use error::GeocodeError;
pub use types::{AddressMatch, GeocodeResponse, GeocodeResult, MatchCoordinates};
