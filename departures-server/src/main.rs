use std::net::SocketAddr;

use departures_server::config::AppConfig;
use departures_server::geocode::{GeocoderClient, GeocoderConfig};
use departures_server::pipeline::Pipeline;
use departures_server::transit::{PredictionClient, PredictionConfig};
use departures_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Create the geocoder client
    let mut geocoder_config = GeocoderConfig::new();
    if let Some(url) = config.geocoder_base_url.as_deref() {
        geocoder_config = geocoder_config.with_base_url(url);
    }
    let geocoder = GeocoderClient::new(geocoder_config).expect("Failed to create geocoder client");

    // Create the predictions client
    let mut prediction_config = PredictionConfig::new();
    if let Some(url) = config.transit_base_url.as_deref() {
        prediction_config = prediction_config.with_base_url(url);
    }
    let predictions =
        PredictionClient::new(prediction_config).expect("Failed to create predictions client");

    // Build the pipeline and app state
    let pipeline = Pipeline::new(geocoder, predictions, config.stop_sequence);
    let state = AppState::new(pipeline, config.route_id.clone());

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!(%addr, route = %config.route_id, "departures server listening");
    tracing::info!("GET /departures?address=<street address>[&route=<id>]");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
