//! The decision-and-relay procedure.

use std::sync::Arc;

use relay_core::{
    InboundEvent, MessageSender, ModerationError, ModerationVerdict, Moderator, OutboundAction,
    OutboundSms, RelayCommand, Reply,
};
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::config::RelayConfig;

/// Reply to the owner when a command has no usable `:` separator.
pub const MALFORMED_COMMAND_REPLY: &str = "You need to specify a recipient number and a \":\" before the message. For example, \"+12223334444: message\".";

/// Reply to the owner when the transport rejects a relayed message.
pub const SEND_FAILED_REPLY: &str =
    "There was an issue with the phone number you entered; please verify it is correct and try again.";

/// Owner-facing text for a message that passed moderation.
pub fn forward_text(sender: &str, body: &str) -> String {
    format!("{}: {}", sender, body)
}

/// Owner-facing text for a message that failed moderation.
pub fn block_notice(sender: &str, verdict: &ModerationVerdict) -> String {
    format!("This SMS from {} was blocked for {}.", sender, verdict.reason())
}

/// Owner-facing text for a message whose moderation could not complete.
pub fn withheld_notice(sender: &str) -> String {
    format!("Moderation is unavailable; an SMS from {} was withheld.", sender)
}

/// Handles inbound SMS events for a single owner.
///
/// Stateless between calls; one handler can serve concurrent events.
pub struct RelayHandler {
    config: RelayConfig,
    sender: Arc<dyn MessageSender>,
    moderator: Arc<dyn Moderator>,
}

impl RelayHandler {
    /// Create a handler with its collaborators.
    pub fn new(
        config: RelayConfig,
        sender: Arc<dyn MessageSender>,
        moderator: Arc<dyn Moderator>,
    ) -> Self {
        Self {
            config,
            sender,
            moderator,
        }
    }

    /// Whether `event` comes from the configured owner.
    pub fn is_owner(&self, event: &InboundEvent) -> bool {
        event.is_from(&self.config.owner_number)
    }

    /// Handle one event, producing exactly one action.
    pub async fn handle(&self, event: &InboundEvent) -> OutboundAction {
        if self.is_owner(event) {
            debug!("Message {} is from the owner", event.message_sid);
            self.relay_command(event).await
        } else {
            debug!("Message {} is from {}", event.message_sid, event.sender);
            self.moderate(event).await
        }
    }

    /// Owner path: parse `recipient: body` and send it on.
    async fn relay_command(&self, event: &InboundEvent) -> OutboundAction {
        let command = match RelayCommand::parse(&event.body) {
            Ok(command) => command,
            Err(e) => {
                info!("Malformed owner command ({})", e);
                return OutboundAction::Reply(Reply::to_sender(MALFORMED_COMMAND_REPLY));
            }
        };

        let message = OutboundSms::new(command.recipient, event.recipient.clone(), command.body);

        match self.sender.send_message(&message).await {
            Ok(receipt) => {
                info!(
                    "Relayed owner message to {} via {} (sid={:?})",
                    message.to,
                    self.sender.name(),
                    receipt.sid
                );
                OutboundAction::Sent { message, receipt }
            }
            Err(e) => {
                warn!("Failed to relay owner message to {}: {}", message.to, e);
                OutboundAction::Reply(Reply::to_sender(SEND_FAILED_REPLY))
            }
        }
    }

    /// Third-party path: moderate, then forward or block.
    async fn moderate(&self, event: &InboundEvent) -> OutboundAction {
        let request = self.config.profile.build_request(event);
        let owner = &self.config.owner_number;

        let verdict = match timeout(
            self.config.moderation_timeout,
            self.moderator.moderate(&request),
        )
        .await
        {
            Ok(result) => result,
            Err(_elapsed) => Err(ModerationError::Timeout(self.config.moderation_timeout)),
        };

        let body = match verdict {
            Ok(verdict) if verdict.is_violation() => {
                info!(
                    "Blocked message {} from {} (flagged: {})",
                    event.message_sid,
                    event.sender,
                    verdict.flagged().join(", ")
                );
                block_notice(&event.sender, &verdict)
            }
            Ok(_) => {
                info!(
                    "Forwarding message {} from {} to owner",
                    event.message_sid, event.sender
                );
                forward_text(&event.sender, &event.body)
            }
            Err(e) => {
                error!(
                    "Moderation via {} failed for message {} from {}: {}",
                    self.moderator.name(),
                    event.message_sid,
                    event.sender,
                    e
                );
                withheld_notice(&event.sender)
            }
        };

        OutboundAction::Reply(Reply::to_number(owner.clone(), body))
    }
}

impl std::fmt::Debug for RelayHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayHandler")
            .field("config", &self.config)
            .field("sender", &self.sender.name())
            .field("moderator", &self.moderator.name())
            .finish()
    }
}
