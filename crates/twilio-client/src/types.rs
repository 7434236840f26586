//! Request and response types for the Messages API.

use serde::{Deserialize, Serialize};

/// Form parameters for creating a message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageParams {
    /// Destination number.
    #[serde(rename = "To")]
    pub to: String,

    /// Sending number.
    #[serde(rename = "From")]
    pub from: String,

    /// Message text.
    #[serde(rename = "Body")]
    pub body: String,
}

impl MessageParams {
    /// Create params for a plain text message.
    pub fn new(to: impl Into<String>, from: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            body: body.into(),
        }
    }
}

/// A created message, as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    /// Message SID (`SM...`).
    pub sid: String,

    /// Delivery status at creation time (usually `queued`).
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned on non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Provider error code (e.g. 21211 for an invalid `To` number).
    #[serde(default)]
    pub code: i64,

    /// Human-readable error.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_params_field_names() {
        let params = MessageParams::new("+1", "+2", "hi");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["To"], "+1");
        assert_eq!(json["From"], "+2");
        assert_eq!(json["Body"], "hi");
    }

    #[test]
    fn test_parse_message_resource() {
        let json = r#"{"sid":"SM123","status":"queued","to":"+1","from":"+2","body":"hi","num_segments":"1"}"#;
        let msg: MessageResource = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sid, "SM123");
        assert_eq!(msg.status.as_deref(), Some("queued"));
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{"code":21211,"message":"Invalid 'To' Phone Number","more_info":"https://www.twilio.com/docs/errors/21211","status":400}"#;
        let err: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(err.code, 21211);
        assert!(err.message.contains("Invalid"));
    }
}
