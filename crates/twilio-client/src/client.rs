//! Messages API HTTP client.

use async_trait::async_trait;
use relay_core::{MessageSender, OutboundSms, SendReceipt, TransportError};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::TwilioConfig;
use crate::error::TwilioError;
use crate::types::{ApiErrorBody, MessageParams, MessageResource};

/// Client for creating messages.
#[derive(Clone)]
pub struct TwilioClient {
    http: Client,
    config: TwilioConfig,
}

impl TwilioClient {
    /// Create a client. No request is made until a message is sent.
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioError> {
        if config.account_sid.trim().is_empty() {
            return Err(TwilioError::Config("account SID is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TwilioError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a new outbound message.
    pub async fn create_message(
        &self,
        params: &MessageParams,
    ) -> Result<MessageResource, TwilioError> {
        let url = self.config.messages_url();
        debug!("Creating message to {}", params.to);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error: ApiErrorBody = serde_json::from_str(&body).unwrap_or(ApiErrorBody {
                code: 0,
                message: body,
            });
            return Err(TwilioError::Api {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }

        let message: MessageResource = serde_json::from_str(&body)?;
        info!(
            "Created message {} to {} ({})",
            message.sid,
            params.to,
            message.status.as_deref().unwrap_or("unknown")
        );
        Ok(message)
    }

    /// Send a text message.
    pub async fn send_text(
        &self,
        to: &str,
        from: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        self.create_message(&MessageParams::new(to, from, body)).await
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    async fn send_message(&self, message: &OutboundSms) -> Result<SendReceipt, TransportError> {
        let created = self
            .send_text(&message.to, &message.from, &message.body)
            .await?;
        Ok(SendReceipt::with_sid(created.sid))
    }

    fn name(&self) -> &str {
        "TwilioClient"
    }
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("config", &self.config)
            .finish()
    }
}
