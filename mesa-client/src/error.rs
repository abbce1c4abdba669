//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network unreachable, timeout, or other transport failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid response format
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Request rejected before it was sent
    #[error("validation error: {0}")]
    Validation(String),

    /// Non-2xx response carrying a server-provided message
    #[error("{0}")]
    Remote(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for direct display. Server-provided messages are
    /// surfaced verbatim; transport and decoding failures get a generic
    /// fallback since their payloads mean nothing to staff.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Remote(message) => message.clone(),
            ClientError::NotFound(message) => message.clone(),
            ClientError::Validation(message) => message.clone(),
            ClientError::Unauthorized => "Session expired, sign in again.".to_string(),
            ClientError::Transport(_) => {
                "Could not reach the server. Check the connection and try again.".to_string()
            }
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Unexpected server response. Try again.".to_string()
            }
        }
    }

    /// True when the failure is an explicit not-found signal rather than
    /// a transport problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
