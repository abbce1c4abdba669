//! Front-end error types

use mesa_client::ClientError;
use thiserror::Error;

/// Error type for session and workflow operations
#[derive(Debug, Error)]
pub enum FrontError {
    /// Client-side validation failure; the request never reaches the
    /// network.
    #[error("{0}")]
    Validation(String),

    /// No authenticated staff identity. Requires re-authentication, not
    /// a form fix.
    #[error("no staff member signed in")]
    SessionRequired,

    /// Failure reported by the HTTP client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Session persistence failure
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Session (de)serialization failure
    #[error("session serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrontError {
    /// Message suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            FrontError::Validation(message) => message.clone(),
            FrontError::SessionRequired => "Staff member not signed in. Sign in again.".to_string(),
            FrontError::Client(e) => e.user_message(),
            FrontError::Storage(_) | FrontError::Json(_) => {
                "Could not persist the session.".to_string()
            }
        }
    }
}

/// Result type for front-end operations
pub type FrontResult<T> = Result<T, FrontError>;
