//! Mock transports for testing the SMS relay.
//!
//! This crate provides mock implementations of the relay's collaborator traits:
//! - `RecordingSender` - Records every outbound message and succeeds
//! - `FailingSender` - Rejects every outbound message
//! - `StaticModerator` - Returns a fixed verdict and records requests
//! - `FailingModerator` - Fails every moderation call
//! - `DelayedModerator` - Wraps another moderator with artificial delay
//!
//! For production use, see the `twilio-client` and `moderation-client` crates.
//!
//! # Example
//!
//! ```rust
//! use mock_transport::{MessageSender, OutboundSms, RecordingSender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_transport::TransportError> {
//!     let sender = RecordingSender::new();
//!     sender.send_message(&OutboundSms::new("+15552223333", "+15550009999", "hi")).await?;
//!     assert_eq!(sender.sent().len(), 1);
//!     Ok(())
//! }
//! ```

mod delayed;
mod moderator;
mod sender;

// Re-export relay-core types for convenience
pub use relay_core::{
    async_trait, MessageSender, ModerationError, ModerationRequest, ModerationVerdict, Moderator,
    OutboundSms, SendReceipt, TransportError,
};

pub use delayed::DelayedModerator;
pub use moderator::{FailingModerator, StaticModerator};
pub use sender::{FailingSender, RecordingSender};
