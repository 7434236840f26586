//! Configuration types for twilio-client.

use std::env;
use std::time::Duration;

use crate::error::TwilioError;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.twilio.com";

/// Configuration for the Messages API.
#[derive(Clone)]
pub struct TwilioConfig {
    /// Base URL of the REST API (e.g., "https://api.twilio.com").
    pub api_url: String,
    /// Account SID, also the basic-auth username.
    pub account_sid: String,
    /// Auth token, the basic-auth password.
    pub auth_token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl TwilioConfig {
    /// Create a new configuration against the public API.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Point the client at a different base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TWILIO_ACCOUNT_SID`
    /// - `TWILIO_AUTH_TOKEN`
    ///
    /// Optional environment variables:
    /// - `TWILIO_API_URL` - API base URL (default: https://api.twilio.com)
    pub fn from_env() -> Result<Self, TwilioError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TwilioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_sid = lookup("TWILIO_ACCOUNT_SID")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| TwilioError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = lookup("TWILIO_AUTH_TOKEN")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| TwilioError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let api_url = lookup("TWILIO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self::new(account_sid, auth_token).with_api_url(api_url))
    }

    /// Get the message creation endpoint URL.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&self.account_sid)
        )
    }
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("api_url", &self.api_url)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        let config = TwilioConfig::new("AC123", "token");
        assert_eq!(
            config.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn test_messages_url_custom_base() {
        let config = TwilioConfig::new("AC123", "token").with_api_url("http://127.0.0.1:9000/");
        assert_eq!(
            config.messages_url(),
            "http://127.0.0.1:9000/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", TwilioConfig::new("AC123", "hunter2"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_from_lookup_defaults_api_url() {
        let config = TwilioConfig::from_lookup(|key| match key {
            "TWILIO_ACCOUNT_SID" => Some("AC123".to_string()),
            "TWILIO_AUTH_TOKEN" => Some("token".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.account_sid, "AC123");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = TwilioConfig::from_lookup(|key| match key {
            "TWILIO_ACCOUNT_SID" => Some("AC123".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, TwilioError::Config(ref m) if m.contains("TWILIO_AUTH_TOKEN")));
    }
}
