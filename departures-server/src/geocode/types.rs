//! Geocoder API response DTOs.
//!
//! These types map directly to the provider's JSON responses. The match
//! list is the only part we read; everything else the provider sends is
//! ignored during deserialization.

use serde::Deserialize;

/// Top-level response from the one-line-address endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub result: GeocodeResult,
}

/// The `result` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    /// Matches for the queried address, best first.
    ///
    /// Empty (or absent entirely) when the provider does not know the
    /// address; that case becomes `AddressNotFound`.
    #[serde(default)]
    pub address_matches: Vec<AddressMatch>,
}

/// One candidate match for the queried address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMatch {
    /// The provider's normalized form of the matched address.
    pub matched_address: Option<String>,

    /// Coordinates of the match.
    pub coordinates: MatchCoordinates,
}

/// Coordinates as the provider reports them.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchCoordinates {
    /// Longitude in decimal degrees.
    pub x: f64,

    /// Latitude in decimal degrees.
    pub y: f64,
}
