//! Shared types for the Mesa front-end
//!
//! Domain models, backend response envelopes, and formatting utilities
//! used by both the HTTP client and the front-end controllers.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiError, ApiResponse, Page, PageResponse};
