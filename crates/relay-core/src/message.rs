//! Outbound message types.

use serde::{Deserialize, Serialize};

/// A new message to hand to the outbound transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundSms {
    /// Destination number.
    pub to: String,
    /// Number the message is sent from.
    pub from: String,
    /// Message text.
    pub body: String,
}

impl OutboundSms {
    /// Create a new outbound message.
    pub fn new(to: impl Into<String>, from: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            body: body.into(),
        }
    }
}

/// Transport acknowledgment for a sent message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Provider identifier of the created message, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl SendReceipt {
    /// Receipt carrying a provider message identifier.
    pub fn with_sid(sid: impl Into<String>) -> Self {
        Self {
            sid: Some(sid.into()),
        }
    }
}

/// An in-channel reply to the inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Explicit addressee. `None` answers the sender of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Reply text.
    pub body: String,
}

impl Reply {
    /// Reply to whoever sent the event.
    pub fn to_sender(body: impl Into<String>) -> Self {
        Self {
            to: None,
            body: body.into(),
        }
    }

    /// Reply addressed to a specific number.
    pub fn to_number(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            body: body.into(),
        }
    }
}

/// The single outcome of handling one inbound event.
///
/// Either a new message was sent (and the channel is acknowledged
/// silently), or a reply is returned in-channel. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundAction {
    /// A relay command was sent; acknowledge without reply text.
    Sent {
        /// The message that was handed to the transport.
        message: OutboundSms,
        /// The transport's acknowledgment.
        receipt: SendReceipt,
    },

    /// Reply in-channel.
    Reply(Reply),
}

impl OutboundAction {
    /// The reply, if this action carries one.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            OutboundAction::Reply(reply) => Some(reply),
            OutboundAction::Sent { .. } => None,
        }
    }

    /// Whether this action is a silent acknowledgment of a send.
    pub fn is_silent(&self) -> bool {
        matches!(self, OutboundAction::Sent { .. })
    }
}
