//! Web layer for the departures server.
//!
//! A thin consumer of the pipeline: one endpoint runs it and renders the
//! result as a JSON array or an HTML fragment, plus an index page with the
//! search form.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
