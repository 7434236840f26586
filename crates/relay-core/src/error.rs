//! Error types for the external collaborators.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by an outbound message transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport refused the message (e.g. an invalid recipient number).
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The transport could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The transport answered with something we could not understand.
    #[error("invalid transport response: {0}")]
    InvalidResponse(String),
}

/// Errors returned by the moderation service.
///
/// Every variant is treated the same way by the relay: the message is
/// withheld from the owner.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// The request could not be delivered.
    #[error("moderation request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a non-success status.
    #[error("moderation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a valid verdict.
    #[error("invalid moderation verdict: {0}")]
    InvalidVerdict(String),

    /// No verdict arrived within the configured bound.
    #[error("moderation timed out after {0:?}")]
    Timeout(Duration),
}
