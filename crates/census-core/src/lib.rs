//! # census-core
//!
//! Core types shared across the optimade-census crates:
//! - The fixed periodic table the prober works over
//! - Presence maps, including the compact `{ "all": false }` form
//! - Records for the persisted ptable and counts documents
//! - CORS proxy rewriting rules

pub mod cors;
pub mod elements;
pub mod presence;
pub mod records;

pub use cors::CorsProxy;
pub use elements::{Element, ElementGroup, PERIODIC_TABLE};
pub use presence::PresenceTable;
pub use records::{CountBounds, CountsChild, CountsEntry, PtableDocument, PtableEntry};

/// Returns `true` when `url` looks like a usable OPTIMADE base endpoint.
///
/// Only the scheme prefix is checked; anything that does not start with
/// `http` (including `https`) is skipped by the drivers.
#[must_use]
pub fn is_http_url(url: Option<&str>) -> bool {
    url.is_some_and(|u| u.starts_with("http"))
}
