//! Inbound SMS event.

use serde::{Deserialize, Serialize};

/// A single incoming SMS, as posted by the messaging webhook.
///
/// Field names on the wire follow the messaging provider's form
/// parameters (`From`, `To`, `Body`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Phone number of the sender.
    #[serde(rename = "From")]
    pub sender: String,

    /// Phone number the message arrived on.
    #[serde(rename = "To")]
    pub recipient: String,

    /// Message text.
    #[serde(rename = "Body", default)]
    pub body: String,

    /// Provider-assigned message identifier.
    #[serde(rename = "MessageSid", default)]
    pub message_sid: String,

    /// URL of the first media attachment, if any.
    #[serde(rename = "MediaUrl0", default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,

    /// Sender's city, when the carrier reports it.
    #[serde(rename = "FromCity", default, skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,

    /// Sender's state or region, when the carrier reports it.
    #[serde(rename = "FromState", default, skip_serializing_if = "Option::is_none")]
    pub from_state: Option<String>,

    /// IANA timezone name supplied with the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl InboundEvent {
    /// Create an event with the required fields.
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the provider message identifier.
    pub fn with_message_sid(mut self, sid: impl Into<String>) -> Self {
        self.message_sid = sid.into();
        self
    }

    /// Attach a media URL.
    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// Set the sender's locality.
    pub fn with_locality(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.from_city = Some(city.into());
        self.from_state = Some(state.into());
        self
    }

    /// Set the sender's timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Whether this event was sent by `owner`.
    ///
    /// Exact comparison; numbers are expected in the same (E.164) form
    /// the provider delivers them in.
    pub fn is_from(&self, owner: &str) -> bool {
        self.sender == owner
    }

    /// `"City, State"` built from whichever locality parts are present.
    pub fn region(&self) -> Option<String> {
        let parts: Vec<&str> = [self.from_city.as_deref(), self.from_state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
