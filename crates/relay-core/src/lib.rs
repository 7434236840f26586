//! Core types and traits for the moderated SMS relay.
//!
//! This crate provides the shared vocabulary used by the relay handler,
//! the transport clients and the webhook server:
//!
//! - [`InboundEvent`] - One incoming SMS as delivered by the messaging webhook
//! - [`RelayCommand`] - An owner-authored `recipient: body` instruction
//! - [`ModerationRequest`] / [`ModerationVerdict`] - The moderation webhook contract
//! - [`OutboundAction`] - The single result of handling one event
//! - [`MessageSender`] / [`Moderator`] - Seams for the external collaborators
//!
//! # Example
//!
//! ```rust
//! use relay_core::{InboundEvent, RelayCommand};
//!
//! let event = InboundEvent::new("+15550001111", "+15550009999", "+15552223333: hello there");
//! assert!(event.is_from("+15550001111"));
//!
//! let command = RelayCommand::parse(&event.body).unwrap();
//! assert_eq!(command.recipient, "+15552223333");
//! assert_eq!(command.body, "hello there");
//! ```

mod command;
mod error;
mod event;
mod message;
mod moderation;
mod traits;

pub use command::{MalformedCommand, RelayCommand};
pub use error::{ModerationError, TransportError};
pub use event::InboundEvent;
pub use message::{OutboundAction, OutboundSms, Reply, SendReceipt};
pub use moderation::{
    resolve_timezone, AttributeProfile, ModerationContent, ModerationProfile, ModerationRequest,
    ModerationVerdict, DEFAULT_CATEGORY, DEFAULT_TIMEZONE,
};
pub use traits::{MessageSender, Moderator};

// Re-export async_trait for implementors
pub use async_trait::async_trait;
