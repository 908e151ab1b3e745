//! Transit predictions provider client.
//!
//! Fetches the raw prediction collection for a coordinate. The query is
//! filtered server-side by proximity only; route and stop filtering is the
//! extractor's job. Related stop/route/trip/schedule resources are requested
//! up front so no follow-up calls are needed.

mod client;
mod error;
pub mod mock;
mod types;

pub use client::{PredictionClient, PredictionConfig};
pub use error::PredictionError;
pub use mock::MockPredictionClient;
pub use types::{
    PredictionAttributes, PredictionDocument, PredictionRelationships, PredictionResource,
    ResourceRef, RouteRelationship,
};
