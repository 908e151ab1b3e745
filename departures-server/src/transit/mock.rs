//! Mock prediction source for testing without API access.
//!
//! Loads a canned predictions response from a JSON file and serves it as if
//! it were a live API response. Useful for development against recorded
//! provider data and for exercising the pipeline in tests.

use std::path::Path;

use crate::domain::Coordinate;
use crate::pipeline::PredictionSource;

use super::error::PredictionError;
use super::types::{PredictionDocument, PredictionResource};

/// Prediction source backed by a fixed, pre-loaded response.
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    data: Vec<PredictionResource>,
}

impl MockPredictionClient {
    /// Create a mock serving the given predictions.
    pub fn new(data: Vec<PredictionResource>) -> Self {
        Self { data }
    }

    /// Load a recorded predictions response from a JSON file.
    ///
    /// The file holds a full provider response document (the same shape the
    /// live endpoint returns).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| PredictionError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;

        let document: PredictionDocument =
            serde_json::from_str(&json).map_err(|e| PredictionError::Json {
                message: e.to_string(),
                body: None,
            })?;

        Ok(Self {
            data: document.data,
        })
    }

    /// The loaded predictions.
    pub fn predictions(&self) -> &[PredictionResource] {
        &self.data
    }
}

impl PredictionSource for MockPredictionClient {
    /// Returns the canned data regardless of the coordinate.
    async fn fetch_predictions(
        &self,
        _coord: &Coordinate,
    ) -> Result<Vec<PredictionResource>, PredictionError> {
        Ok(self.data.clone())
    }
}
