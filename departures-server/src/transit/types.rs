//! Predictions API response DTOs.
//!
//! The provider speaks JSON:API: a `data` array of prediction resources,
//! each with an `attributes` object and a `relationships` object. These
//! types use `Option` wherever the provider may send null or omit a field;
//! the departure time is the one deliberately optional attribute (null at
//! a trip's final stop, which arrives but never departs).

use serde::Deserialize;

/// Top-level predictions response.
///
/// The `included` side-loaded resources are not modeled; everything the
/// extractor needs lives on the prediction resources themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionDocument {
    /// All predictions within the query's geographic radius, unfiltered.
    #[serde(default)]
    pub data: Vec<PredictionResource>,
}

/// One prediction: an estimate of when a vehicle will reach a stop on a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResource {
    /// Provider identifier for this prediction.
    pub id: Option<String>,

    /// Scalar fields of the prediction.
    pub attributes: PredictionAttributes,

    /// Links to related resources; only the route link is read.
    #[serde(default)]
    pub relationships: PredictionRelationships,
}

/// Scalar prediction fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionAttributes {
    /// ISO-8601 departure time, or null at the trip's final stop.
    pub departure_time: Option<String>,

    /// 1-based position of the stop within the trip's itinerary.
    pub stop_sequence: Option<u32>,
}

/// Relationship links for a prediction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRelationships {
    /// The route this prediction belongs to.
    #[serde(default)]
    pub route: RouteRelationship,
}

/// A single-resource relationship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRelationship {
    /// Reference to the related resource, or null.
    pub data: Option<ResourceRef>,
}

/// Identifier of a related resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    /// Resource id (for routes, the route identifier, e.g. "71").
    pub id: String,

    /// Resource type, e.g. "route".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
