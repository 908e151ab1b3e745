//! Next-bus departures server.
//!
//! A web application that answers: "given a street address, when does
//! the next bus on a given route leave the nearest stop?" It composes a
//! street-address geocoder and a transit-predictions API into one sorted,
//! human-readable list of upcoming departures.

pub mod config;
pub mod domain;
pub mod extract;
pub mod geocode;
pub mod pipeline;
pub mod transit;
pub mod web;
