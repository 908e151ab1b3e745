//! Askama templates for the web frontend.

use askama::Template;

/// Home page with the address search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Pre-filled route for the form's route field.
    pub default_route: String,
}

/// Departure list fragment (search results).
#[derive(Template)]
#[template(path = "departure_list.html")]
pub struct DepartureListTemplate {
    /// Display-ready departure strings, already ordered.
    pub departures: Vec<String>,
    /// The address as the user entered it.
    pub address: String,
    /// The route the list is for.
    pub route: String,
}
