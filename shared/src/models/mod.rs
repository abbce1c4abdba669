//! Data models
//!
//! Shared between the HTTP client and the front-end controllers.
//! All IDs are `i64`, assigned by the backend.

pub mod client;
pub mod employee;
pub mod reservation;
pub mod table;

// Re-exports
pub use client::*;
pub use employee::*;
pub use reservation::*;
pub use table::*;
