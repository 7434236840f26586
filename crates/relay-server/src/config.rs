//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use moderation_client::{ClientError, ModerationConfig};
use sms_relay::{RelayConfig, RelayError};
use twilio_client::{TwilioConfig, TwilioError};

/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Owner identity and moderation request settings.
    pub relay: RelayConfig,
    /// Moderation webhook endpoint and credentials.
    pub moderation: ModerationConfig,
    /// Outbound transport credentials.
    pub twilio: TwilioConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `RELAY_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `OWNER_PHONE_NUMBER` | Trusted owner number | (required) |
    /// | `MODERATION_WEBHOOK_URL` | Moderation endpoint | (required) |
    /// | `MODERATION_CLIENT_ID` | Moderation client id | (required) |
    /// | `MODERATION_API_KEY` | Moderation API key | (required) |
    /// | `MODERATION_TIMEOUT_SECS` | Moderation call bound | `10` |
    /// | `MODERATION_CATEGORY` | Category tag | `sms` |
    /// | `MODERATION_ATTRIBUTES` | `locality` or `static` | `locality` |
    /// | `MODERATION_STATIC_ATTRIBUTES` | `key=value,...` | (empty) |
    /// | `DEFAULT_TIMEZONE` | Fallback IANA zone | `America/Chicago` |
    /// | `TWILIO_ACCOUNT_SID` | Transport account | (required) |
    /// | `TWILIO_AUTH_TOKEN` | Transport token | (required) |
    /// | `TWILIO_API_URL` | Transport base URL | `https://api.twilio.com` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("RELAY_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let relay = RelayConfig::from_lookup(&lookup)?;
        let moderation =
            ModerationConfig::from_lookup(&lookup)?.with_timeout(relay.moderation_timeout);
        let twilio = TwilioConfig::from_lookup(&lookup)?;

        Ok(Self {
            addr,
            relay,
            moderation,
            twilio,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid RELAY_ADDR format")]
    InvalidAddr,

    #[error("Relay: {0}")]
    Relay(#[from] RelayError),

    #[error("Moderation: {0}")]
    Moderation(#[from] ClientError),

    #[error("Twilio: {0}")]
    Twilio(#[from] TwilioError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("OWNER_PHONE_NUMBER", "+15550001111"),
            ("MODERATION_WEBHOOK_URL", "https://mod.example/check"),
            ("MODERATION_CLIENT_ID", "relay"),
            ("MODERATION_API_KEY", "key"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "token"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = load(&base_vars()).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.relay.owner_number, "+15550001111");
        assert_eq!(config.moderation.timeout, Duration::from_secs(10));
        assert_eq!(config.twilio.account_sid, "AC123");
    }

    #[test]
    fn test_moderation_timeout_applies_to_client() {
        let mut vars = base_vars();
        vars.insert("MODERATION_TIMEOUT_SECS", "3");
        let config = load(&vars).unwrap();
        assert_eq!(config.relay.moderation_timeout, Duration::from_secs(3));
        assert_eq!(config.moderation.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_moderation_timeout_rejected() {
        let mut vars = base_vars();
        vars.insert("MODERATION_TIMEOUT_SECS", "0");
        assert!(matches!(load(&vars), Err(ConfigError::Relay(_))));
    }

    #[test]
    fn test_invalid_addr() {
        let mut vars = base_vars();
        vars.insert("RELAY_ADDR", "not-an-addr");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidAddr)));
    }

    #[test]
    fn test_missing_transport_credentials() {
        let mut vars = base_vars();
        vars.remove("TWILIO_AUTH_TOKEN");
        assert!(matches!(load(&vars), Err(ConfigError::Twilio(_))));
    }
}
