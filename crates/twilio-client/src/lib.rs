//! Twilio Messages API client.
//!
//! This crate provides a small client for creating outbound SMS through
//! the Twilio REST API. [`TwilioClient`] implements
//! [`MessageSender`](relay_core::MessageSender) so it can be used as the
//! relay's outbound transport.
//!
//! # Example
//!
//! ```no_run
//! use twilio_client::{MessageParams, TwilioClient, TwilioConfig};
//!
//! # async fn example() -> Result<(), twilio_client::TwilioError> {
//! let config = TwilioConfig::new("ACxxxxxxxx", "auth-token");
//! let client = TwilioClient::new(config)?;
//!
//! let message = client
//!     .create_message(&MessageParams::new("+15552223333", "+15550009999", "Hello!"))
//!     .await?;
//! println!("Created {}", message.sid);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TwilioClient;
pub use config::TwilioConfig;
pub use error::TwilioError;
pub use types::{ApiErrorBody, MessageParams, MessageResource};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
