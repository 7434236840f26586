//! Error types for the webhook server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while accepting a webhook.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The webhook body was not a usable inbound event.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::BadRequest(msg) => {
                tracing::warn!("Rejected webhook: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for webhook handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
