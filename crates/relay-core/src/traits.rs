//! Seams for the external collaborators.

use async_trait::async_trait;

use crate::error::{ModerationError, TransportError};
use crate::message::{OutboundSms, SendReceipt};
use crate::moderation::{ModerationRequest, ModerationVerdict};

/// Outbound message transport.
///
/// Abstracted to support different providers (the REST API, tests, etc.)
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a new message. An invalid recipient is reported as
    /// [`TransportError::Rejected`].
    async fn send_message(&self, message: &OutboundSms) -> Result<SendReceipt, TransportError>;

    /// Name of this transport, for logging.
    fn name(&self) -> &str;
}

/// External content moderation service.
#[async_trait]
pub trait Moderator: Send + Sync {
    /// Submit content and return the service's verdict.
    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError>;

    /// Name of this moderator, for logging.
    fn name(&self) -> &str;
}
