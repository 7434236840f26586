//! Error types for relay setup.

use thiserror::Error;

/// Errors that can occur while configuring the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A required setting is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A setting is present but unusable.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
