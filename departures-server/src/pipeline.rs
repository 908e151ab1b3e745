//! Pipeline orchestration.
//!
//! Sequences geocoding, prediction fetching, and extraction for a single
//! request: address → coordinates → raw predictions → ordered departure
//! strings. Stages run strictly in order (each consumes the previous
//! stage's output), short-circuit on the first failure, and each external
//! call happens at most once per request. No retries, no caching, no
//! state shared between runs.

use std::future::Future;

use crate::domain::Coordinate;
use crate::extract::{ExtractError, extract_departures};
use crate::geocode::{GeocodeError, GeocoderClient};
use crate::transit::{PredictionClient, PredictionError, PredictionResource};

/// Source of coordinates for a free-text address.
///
/// Implemented by the real geocoder client; test doubles implement it to
/// exercise the orchestrator without network access.
pub trait GeocodeSource {
    /// Resolve a free-text address to a coordinate pair.
    fn resolve_address(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}

/// Source of raw predictions for a coordinate.
///
/// Implemented by the real predictions client and by the file-backed mock.
pub trait PredictionSource {
    /// Fetch all predictions near a coordinate.
    fn fetch_predictions(
        &self,
        coord: &Coordinate,
    ) -> impl Future<Output = Result<Vec<PredictionResource>, PredictionError>> + Send;
}

impl GeocodeSource for GeocoderClient {
    async fn resolve_address(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        GeocoderClient::resolve_address(self, address).await
    }
}

impl PredictionSource for PredictionClient {
    async fn fetch_predictions(
        &self,
        coord: &Coordinate,
    ) -> Result<Vec<PredictionResource>, PredictionError> {
        PredictionClient::fetch_predictions(self, coord).await
    }
}

/// A pipeline failure, classified for the inbound interface.
///
/// `AddressNotFound` is the one user-correctable case and must stay
/// distinguishable from the rest; everything else is a server-side or
/// upstream failure reported generically.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The geocoder had no match for the address (client error).
    #[error("could not find address")]
    AddressNotFound,

    /// The geocoding call itself failed (transport or upstream error).
    #[error("geocoding failed: {0}")]
    Geocode(#[source] GeocodeError),

    /// The predictions call failed (transport or upstream error).
    #[error("prediction fetch failed: {0}")]
    PredictionFetch(#[source] PredictionError),

    /// The provider sent an unparseable departure timestamp.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl From<GeocodeError> for PipelineError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::AddressNotFound => PipelineError::AddressNotFound,
            other => PipelineError::Geocode(other),
        }
    }
}

impl From<PredictionError> for PipelineError {
    fn from(err: PredictionError) -> Self {
        PipelineError::PredictionFetch(err)
    }
}

/// The resolution pipeline for one route's departures near an address.
#[derive(Debug, Clone)]
pub struct Pipeline<G, P> {
    geocoder: G,
    predictions: P,
    /// Stop position within a trip treated as the boarding stop (1 = first).
    boarding_sequence: u32,
}

impl<G: GeocodeSource, P: PredictionSource> Pipeline<G, P> {
    /// Create a pipeline over the given sources.
    pub fn new(geocoder: G, predictions: P, boarding_sequence: u32) -> Self {
        Self {
            geocoder,
            predictions,
            boarding_sequence,
        }
    }

    /// Resolve the ordered departure list for a route near an address.
    ///
    /// Runs resolve → fetch → extract, stopping at the first failure; no
    /// partial results are ever returned.
    pub async fn resolve_departures(
        &self,
        address: &str,
        route_id: &str,
    ) -> Result<Vec<String>, PipelineError> {
        let coordinate = self.geocoder.resolve_address(address).await?;

        tracing::debug!(%coordinate, route_id, "address resolved, fetching predictions");

        let predictions = self.predictions.fetch_predictions(&coordinate).await?;

        let departures = extract_departures(&predictions, route_id, self.boarding_sequence)?;

        tracing::debug!(count = departures.len(), route_id, "departures extracted");

        Ok(departures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transit::{
        MockPredictionClient, PredictionAttributes, PredictionRelationships, ResourceRef,
        RouteRelationship,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn prediction(route: &str, stop_sequence: u32, departure_time: &str) -> PredictionResource {
        PredictionResource {
            id: None,
            attributes: PredictionAttributes {
                departure_time: Some(departure_time.to_owned()),
                stop_sequence: Some(stop_sequence),
            },
            relationships: PredictionRelationships {
                route: RouteRelationship {
                    data: Some(ResourceRef {
                        id: route.to_owned(),
                        kind: Some("route".to_owned()),
                    }),
                },
            },
        }
    }

    /// Geocoder that always resolves to a fixed coordinate.
    struct StaticGeocoder;

    impl GeocodeSource for StaticGeocoder {
        async fn resolve_address(&self, _address: &str) -> Result<Coordinate, GeocodeError> {
            Ok(Coordinate::new("42.36546", "-71.18564"))
        }
    }

    /// Geocoder with no match for any address.
    struct NoMatchGeocoder;

    impl GeocodeSource for NoMatchGeocoder {
        async fn resolve_address(&self, _address: &str) -> Result<Coordinate, GeocodeError> {
            Err(GeocodeError::AddressNotFound)
        }
    }

    /// Geocoder whose transport always fails.
    struct FailingGeocoder;

    impl GeocodeSource for FailingGeocoder {
        async fn resolve_address(&self, _address: &str) -> Result<Coordinate, GeocodeError> {
            Err(GeocodeError::Api {
                status: 503,
                message: "unavailable".into(),
            })
        }
    }

    /// Prediction source that counts how often it is called.
    struct CountingPredictions {
        calls: AtomicUsize,
    }

    impl CountingPredictions {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PredictionSource for CountingPredictions {
        async fn fetch_predictions(
            &self,
            _coord: &Coordinate,
        ) -> Result<Vec<PredictionResource>, PredictionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    /// Prediction source whose transport always fails.
    struct FailingPredictions;

    impl PredictionSource for FailingPredictions {
        async fn fetch_predictions(
            &self,
            _coord: &Coordinate,
        ) -> Result<Vec<PredictionResource>, PredictionError> {
            Err(PredictionError::Api {
                status: 500,
                message: "boom".into(),
            })
        }
    }

    #[tokio::test]
    async fn resolves_ordered_departures() {
        let predictions = MockPredictionClient::new(vec![
            prediction("71", 1, "2024-06-05T17:42:10Z"),
            prediction("71", 1, "2024-06-05T17:10:00Z"),
            prediction("57", 1, "2024-06-05T17:00:00Z"),
        ]);
        let pipeline = Pipeline::new(StaticGeocoder, predictions, 1);

        let departures = pipeline
            .resolve_departures("120 Pleasant St Watertown MA", "71")
            .await
            .unwrap();

        assert_eq!(
            departures,
            vec![
                "Wednesday, June 5th 2024, 5:10:00 pm",
                "Wednesday, June 5th 2024, 5:42:10 pm",
            ]
        );
    }

    #[tokio::test]
    async fn no_matching_predictions_is_empty_not_an_error() {
        let pipeline = Pipeline::new(StaticGeocoder, MockPredictionClient::new(Vec::new()), 1);

        let departures = pipeline.resolve_departures("somewhere", "71").await.unwrap();

        assert!(departures.is_empty());
    }

    #[tokio::test]
    async fn unknown_address_short_circuits() {
        let predictions = CountingPredictions::new();
        let pipeline = Pipeline::new(NoMatchGeocoder, predictions, 1);

        let err = pipeline
            .resolve_departures("1 Nowhere Ln", "71")
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::AddressNotFound));
        // The prediction fetch never ran
        assert_eq!(pipeline.predictions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn geocoder_transport_failure_is_not_address_not_found() {
        let pipeline = Pipeline::new(FailingGeocoder, CountingPredictions::new(), 1);

        let err = pipeline.resolve_departures("anywhere", "71").await.unwrap_err();

        assert!(matches!(err, PipelineError::Geocode(_)));
        assert_eq!(pipeline.predictions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn prediction_failure_propagates() {
        let pipeline = Pipeline::new(StaticGeocoder, FailingPredictions, 1);

        let err = pipeline.resolve_departures("anywhere", "71").await.unwrap_err();

        assert!(matches!(err, PipelineError::PredictionFetch(_)));
    }

    #[tokio::test]
    async fn malformed_timestamp_propagates() {
        let predictions = MockPredictionClient::new(vec![prediction("71", 1, "not-a-time")]);
        let pipeline = Pipeline::new(StaticGeocoder, predictions, 1);

        let err = pipeline.resolve_departures("anywhere", "71").await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Extract(ExtractError::MalformedTimestamp { .. })
        ));
    }

    #[tokio::test]
    async fn boarding_sequence_flows_through() {
        let predictions = MockPredictionClient::new(vec![
            prediction("71", 1, "2024-06-05T17:00:00Z"),
            prediction("71", 3, "2024-06-05T18:00:00Z"),
        ]);
        let pipeline = Pipeline::new(StaticGeocoder, predictions, 3);

        let departures = pipeline.resolve_departures("anywhere", "71").await.unwrap();

        assert_eq!(departures, vec!["Wednesday, June 5th 2024, 6:00:00 pm"]);
    }
}
