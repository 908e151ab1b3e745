//! Departure extraction.
//!
//! The pure core of the pipeline: turns the provider's raw prediction
//! collection into an ordered list of display-ready departure strings.
//! No I/O, no hidden state; the same input always yields the same output.

use crate::domain::Departure;
use crate::transit::PredictionResource;

/// Errors from departure extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// A selected prediction carried a non-null departure time that does
    /// not parse. This is an upstream data defect, so the whole extraction
    /// fails rather than silently dropping the entry.
    #[error("malformed departure timestamp: {value}")]
    MalformedTimestamp { value: String },
}

/// Extract ordered, display-ready departure strings from raw predictions.
///
/// Steps, in order:
/// 1. keep predictions on `route_id` at stop position `boarding_sequence`
/// 2. take their departure timestamps
/// 3. drop nulls (a trip's final stop arrives but never departs)
/// 4. parse the remaining ISO-8601 timestamps
/// 5. sort ascending by instant (stable, so ties keep input order)
/// 6. render each as a display string
///
/// An empty result is valid: it means no more departures today on this
/// route from this stop.
pub fn extract_departures(
    predictions: &[PredictionResource],
    route_id: &str,
    boarding_sequence: u32,
) -> Result<Vec<String>, ExtractError> {
    let mut departures = collect_departures(predictions, route_id, boarding_sequence)?;
    departures.sort();
    Ok(departures.iter().map(ToString::to_string).collect())
}

/// Select, project, drop nulls, and parse (steps 1-4), in input order.
fn collect_departures(
    predictions: &[PredictionResource],
    route_id: &str,
    boarding_sequence: u32,
) -> Result<Vec<Departure>, ExtractError> {
    let mut departures = Vec::new();

    for prediction in predictions {
        let route = prediction
            .relationships
            .route
            .data
            .as_ref()
            .map(|r| r.id.as_str());

        if route != Some(route_id)
            || prediction.attributes.stop_sequence != Some(boarding_sequence)
        {
            continue;
        }

        // Null means the trip ends here: it arrives but does not depart.
        // Not an error, and not "now".
        let Some(time) = prediction.attributes.departure_time.as_deref() else {
            continue;
        };

        let departure = Departure::parse(time).map_err(|_| ExtractError::MalformedTimestamp {
            value: time.to_owned(),
        })?;

        departures.push(departure);
    }

    Ok(departures)
}
