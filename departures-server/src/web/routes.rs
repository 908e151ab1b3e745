//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::pipeline::PipelineError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/departures", get(get_departures))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate {
            default_route: state.default_route.clone(),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Look up upcoming departures for a route near an address.
async fn get_departures(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DepartureQuery>,
) -> Result<Response, AppError> {
    // No default address: a request without one is a client error, never a
    // lookup of some baked-in location.
    let address = query
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "missing address parameter".to_string(),
        })?;

    let route = query
        .route
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(state.default_route.as_str());

    let departures = state
        .pipeline
        .resolve_departures(address, route)
        .await
        .map_err(AppError::from)?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = DepartureListTemplate {
            departures,
            address: address.to_string(),
            route: route.to_string(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        // JSON response: a bare array of display strings
        Ok(Json(departures).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            // The one user-correctable failure, kept distinguishable
            PipelineError::AddressNotFound => AppError::NotFound {
                message: "Could not find address".to_string(),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
