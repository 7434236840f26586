//! Moderation request construction and verdict interpretation.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::event::InboundEvent;

/// Category tag sent with every request unless configured otherwise.
pub const DEFAULT_CATEGORY: &str = "sms";

/// Zone used for request timestamps when the event carries no usable timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

const ATTR_USER_ID: &str = "user-id";
const ATTR_MEDIA_URL: &str = "media-url";
const ATTR_REGION: &str = "region";

/// Body of a moderation webhook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// RFC 3339 time of submission, in the sender's zone.
    pub timestamp: String,
    /// Category tag (e.g. `"sms"`).
    pub category: String,
    /// The content under review.
    pub content: ModerationContent,
}

/// Content block of a [`ModerationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationContent {
    /// Message identifier.
    pub id: String,
    /// Message text.
    pub text: String,
    /// Free-form metadata about the sender and message.
    pub attributes: BTreeMap<String, String>,
}

/// Which metadata to attach to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttributeProfile {
    /// Sender id, media URL and the carrier-reported region.
    #[default]
    Locality,
    /// Sender id, media URL and fixed metadata pairs. Fixed pairs win
    /// over derived ones with the same key.
    Static(BTreeMap<String, String>),
}

/// How moderation requests are built for a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationProfile {
    /// Category tag.
    pub category: String,
    /// Attribute selection.
    pub attributes: AttributeProfile,
    /// Fallback zone for timestamps.
    pub default_timezone: Tz,
}

impl Default for ModerationProfile {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            attributes: AttributeProfile::default(),
            default_timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl ModerationProfile {
    /// Profile attaching fixed metadata instead of locality.
    pub fn with_static_attributes(attributes: BTreeMap<String, String>) -> Self {
        Self {
            attributes: AttributeProfile::Static(attributes),
            ..Default::default()
        }
    }

    /// Build a request for `event`, timestamped now.
    pub fn build_request(&self, event: &InboundEvent) -> ModerationRequest {
        self.build_request_at(event, Utc::now())
    }

    /// Build a request for `event`, timestamped at `now`.
    pub fn build_request_at(&self, event: &InboundEvent, now: DateTime<Utc>) -> ModerationRequest {
        let tz = resolve_timezone(event.timezone.as_deref(), self.default_timezone);
        let timestamp = now
            .with_timezone(&tz)
            .to_rfc3339_opts(SecondsFormat::Secs, false);

        let mut attributes = BTreeMap::new();
        attributes.insert(ATTR_USER_ID.to_string(), event.sender.clone());
        if let Some(ref url) = event.media_url {
            attributes.insert(ATTR_MEDIA_URL.to_string(), url.clone());
        }

        match &self.attributes {
            AttributeProfile::Locality => {
                if let Some(region) = event.region() {
                    attributes.insert(ATTR_REGION.to_string(), region);
                }
            }
            AttributeProfile::Static(fixed) => {
                attributes.extend(fixed.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        ModerationRequest {
            timestamp,
            category: self.category.clone(),
            content: ModerationContent {
                id: event.message_sid.clone(),
                text: event.body.clone(),
                attributes,
            },
        }
    }
}

/// Resolve an IANA zone name, falling back when it is absent or unknown.
pub fn resolve_timezone(name: Option<&str>, fallback: Tz) -> Tz {
    match name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            warn!("Unknown timezone {:?}, using {}", name, fallback.name());
            fallback
        }),
        None => fallback,
    }
}

/// The moderation service's answer.
///
/// `behaviors` maps each policy category to whether it was triggered.
/// Any other shape is rejected at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Policy category -> triggered.
    pub behaviors: BTreeMap<String, bool>,
}

impl ModerationVerdict {
    /// Whether any category was triggered.
    pub fn is_violation(&self) -> bool {
        self.behaviors.values().any(|&flagged| flagged)
    }

    /// Triggered categories, in sorted order.
    pub fn flagged(&self) -> Vec<&str> {
        self.behaviors
            .iter()
            .filter(|(_, flagged)| **flagged)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Human-readable reason for a block, e.g. `"content (hate, spam)"`.
    pub fn reason(&self) -> String {
        let flagged = self.flagged();
        if flagged.is_empty() {
            "content".to_string()
        } else {
            format!("content ({})", flagged.join(", "))
        }
    }
}
