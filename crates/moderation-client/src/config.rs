//! Configuration types for moderation-client.

use std::env;
use std::time::Duration;

use crate::error::ClientError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the moderation webhook.
#[derive(Clone)]
pub struct ModerationConfig {
    /// Full URL of the moderation endpoint.
    pub endpoint: String,
    /// Sent as `X-Client-Id`.
    pub client_id: String,
    /// Sent as `X-Api-Key`.
    pub api_key: String,
    /// Upper bound on one request, connect to last byte.
    pub timeout: Duration,
}

impl ModerationConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MODERATION_WEBHOOK_URL` - Endpoint URL
    /// - `MODERATION_CLIENT_ID` - Client id header value
    /// - `MODERATION_API_KEY` - API key header value
    ///
    /// The timeout is left at its default; the relay configuration owns
    /// `MODERATION_TIMEOUT_SECS` and applies it with [`Self::with_timeout`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = required(&lookup, "MODERATION_WEBHOOK_URL")?;
        let client_id = required(&lookup, "MODERATION_CLIENT_ID")?;
        let api_key = required(&lookup, "MODERATION_API_KEY")?;

        Ok(Self::new(endpoint, client_id, api_key))
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ClientError::Config(format!("{} not set", key)))
}

impl std::fmt::Debug for ModerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationConfig")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
