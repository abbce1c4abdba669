//! API Response types
//!
//! Wire envelopes used by the restaurant backend, plus the domain-side
//! page type handed to the controllers.

use serde::{Deserialize, Serialize};

/// Error payload carried inside the response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Unified API response structure
///
/// Every backend endpoint answers with this envelope:
/// ```json
/// {
///     "data": { ... },
///     "error": { "message": "...", "details": "..." }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Paged query response as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Page index, 0-based.
    pub number: u32,
    pub size: u32,
}

/// One page of domain records.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
}
