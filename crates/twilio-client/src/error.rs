//! Error types for twilio-client.

use relay_core::TransportError;
use thiserror::Error;

/// Errors that can occur when talking to the Messages API.
#[derive(Debug, Error)]
pub enum TwilioError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the request.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<TwilioError> for TransportError {
    fn from(err: TwilioError) -> Self {
        match err {
            TwilioError::Api { status, message, .. } if (400..500).contains(&status) => {
                TransportError::Rejected(message)
            }
            TwilioError::Api { status, message, .. } => {
                TransportError::Unavailable(format!("HTTP {}: {}", status, message))
            }
            TwilioError::Json(e) => TransportError::InvalidResponse(e.to_string()),
            TwilioError::Http(e) => TransportError::Unavailable(e.to_string()),
            TwilioError::Config(msg) => TransportError::Unavailable(msg),
        }
    }
}
