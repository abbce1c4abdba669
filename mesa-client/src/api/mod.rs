//! API method groups
//!
//! Endpoint bindings grouped by resource, all exposed as `impl
//! HttpClient` blocks.

mod clients;
mod employees;
mod reservations;
mod tables;

pub use tables::TableQuery;
