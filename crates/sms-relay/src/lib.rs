//! Owner command relay and moderation gate for inbound SMS.
//!
//! This crate provides [`RelayHandler`], which turns one inbound SMS
//! event into exactly one [`OutboundAction`].
//!
//! # Architecture
//!
//! ```text
//! InboundEvent
//!      ↓
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        RELAY HANDLER                         │
//! │                                                              │
//! │  From == owner?                                              │
//! │    yes → parse "recipient: body"                             │
//! │            malformed → Reply(usage)                          │
//! │            valid     → send → ok   → Sent (silent)           │
//! │                             → fail → Reply(verify number)    │
//! │    no  → build moderation request → moderate (bounded)       │
//! │            clear     → Reply(owner, "<From>: <Body>")        │
//! │            violation → Reply(owner, block notice)            │
//! │            failure   → Reply(owner, withheld notice)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mock_transport::{RecordingSender, StaticModerator};
//! use relay_core::InboundEvent;
//! use sms_relay::{RelayConfig, RelayHandler};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handler = RelayHandler::new(
//!         RelayConfig::new("+15550001111"),
//!         Arc::new(RecordingSender::new()),
//!         Arc::new(StaticModerator::clear(&["spam"])),
//!     );
//!
//!     let event = InboundEvent::new("+15559998888", "+15550009999", "buy now");
//!     let action = handler.handle(&event).await;
//!     assert_eq!(action.reply().unwrap().body, "+15559998888: buy now");
//! }
//! ```

mod config;
mod error;
mod handler;

pub use config::{RelayConfig, DEFAULT_MODERATION_TIMEOUT};
pub use error::RelayError;
pub use handler::{
    block_notice, forward_text, withheld_notice, RelayHandler, MALFORMED_COMMAND_REPLY,
    SEND_FAILED_REPLY,
};

// Re-export commonly used types from dependencies
pub use relay_core::{InboundEvent, OutboundAction, Reply};
