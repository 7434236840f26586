//! Moderation webhook HTTP client.

use async_trait::async_trait;
use relay_core::{ModerationError, ModerationRequest, ModerationVerdict, Moderator};
use reqwest::Client;
use tracing::debug;

use crate::config::ModerationConfig;
use crate::error::ClientError;

const CLIENT_ID_HEADER: &str = "X-Client-Id";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the moderation webhook.
#[derive(Clone)]
pub struct ModerationClient {
    http: Client,
    config: ModerationConfig,
}

impl ModerationClient {
    /// Create a client. No request is made until [`submit`](Self::submit).
    pub fn new(config: ModerationConfig) -> Result<Self, ClientError> {
        if config.endpoint.trim().is_empty() {
            return Err(ClientError::Config("endpoint is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { http, config })
    }

    /// Submit content for review and parse the verdict.
    pub async fn submit(&self, request: &ModerationRequest) -> Result<ModerationVerdict, ClientError> {
        debug!(
            "Moderation call for {} (category={})",
            request.content.id, request.category
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header(CLIENT_ID_HEADER, &self.config.client_id)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let verdict: ModerationVerdict = serde_json::from_str(&body)?;
        debug!(
            "Moderation verdict for {}: {} categories, violation={}",
            request.content.id,
            verdict.behaviors.len(),
            verdict.is_violation()
        );
        Ok(verdict)
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.config.timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

#[async_trait]
impl Moderator for ModerationClient {
    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError> {
        self.submit(request).await.map_err(ModerationError::from)
    }

    fn name(&self) -> &str {
        "ModerationClient"
    }
}

impl std::fmt::Debug for ModerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_rejected() {
        let err = ModerationClient::new(ModerationConfig::new("  ", "id", "key")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_error_conversion() {
        let err: ModerationError = ClientError::Status {
            status: 401,
            body: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, ModerationError::Status { status: 401, .. }));

        let json_err = serde_json::from_str::<ModerationVerdict>("{").unwrap_err();
        let err: ModerationError = ClientError::Json(json_err).into();
        assert!(matches!(err, ModerationError::InvalidVerdict(_)));
    }
}
