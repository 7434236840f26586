//! Error types for moderation-client.

use std::time::Duration;

use relay_core::ModerationError;
use thiserror::Error;

/// Errors that can occur when calling the moderation webhook.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid verdict.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request did not complete in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ClientError> for ModerationError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status, body } => ModerationError::Status { status, body },
            ClientError::Json(e) => ModerationError::InvalidVerdict(e.to_string()),
            ClientError::Timeout(d) => ModerationError::Timeout(d),
            ClientError::Http(e) => ModerationError::RequestFailed(e.to_string()),
            ClientError::Config(msg) => ModerationError::RequestFailed(msg),
        }
    }
}
