//! Content moderation webhook client.
//!
//! This crate provides a [`ModerationClient`] that submits a
//! [`ModerationRequest`](relay_core::ModerationRequest) to a moderation
//! endpoint and parses the verdict. It implements
//! [`Moderator`](relay_core::Moderator) so it can be handed directly to
//! the relay handler.
//!
//! # Example
//!
//! ```no_run
//! use moderation_client::{ModerationClient, ModerationConfig};
//! use relay_core::{InboundEvent, ModerationProfile};
//!
//! # async fn example() -> Result<(), moderation_client::ClientError> {
//! let config = ModerationConfig::new("https://moderation.example/api", "client-id", "api-key");
//! let client = ModerationClient::new(config)?;
//!
//! let event = InboundEvent::new("+15559998888", "+15550009999", "buy now");
//! let request = ModerationProfile::default().build_request(&event);
//! let verdict = client.submit(&request).await?;
//! println!("violation: {}", verdict.is_violation());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::ModerationClient;
pub use config::ModerationConfig;
pub use error::ClientError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
