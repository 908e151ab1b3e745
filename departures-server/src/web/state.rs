//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::GeocoderClient;
use crate::pipeline::Pipeline;
use crate::transit::PredictionClient;

/// Shared application state.
///
/// Read-only after startup; requests share the pipeline (and through it the
/// HTTP clients' connection pools) but no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// The resolution pipeline over the real provider clients
    pub pipeline: Arc<Pipeline<GeocoderClient, PredictionClient>>,

    /// Route used when a request does not name one
    pub default_route: String,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        pipeline: Pipeline<GeocoderClient, PredictionClient>,
        default_route: impl Into<String>,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            default_route: default_route.into(),
        }
    }
}
