//! Configuration for the relay handler.

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use relay_core::{AttributeProfile, ModerationProfile, DEFAULT_CATEGORY, DEFAULT_TIMEZONE};

use crate::error::RelayError;

/// Default bound on a single moderation call.
pub const DEFAULT_MODERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`crate::RelayHandler`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// The trusted owner's phone number.
    pub owner_number: String,

    /// How moderation requests are built.
    pub profile: ModerationProfile,

    /// Bound on the moderation call. Expiry is handled like any other
    /// moderation failure.
    pub moderation_timeout: Duration,
}

impl RelayConfig {
    /// Create a configuration for the given owner with default moderation settings.
    pub fn new(owner_number: impl Into<String>) -> Self {
        Self {
            owner_number: owner_number.into(),
            profile: ModerationProfile::default(),
            moderation_timeout: DEFAULT_MODERATION_TIMEOUT,
        }
    }

    /// Set the moderation profile.
    pub fn with_profile(mut self, profile: ModerationProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the moderation timeout.
    pub fn with_moderation_timeout(mut self, timeout: Duration) -> Self {
        self.moderation_timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OWNER_PHONE_NUMBER` - The trusted owner's number
    ///
    /// Optional environment variables:
    /// - `MODERATION_TIMEOUT_SECS` - Moderation call bound (default: 10)
    /// - `MODERATION_CATEGORY` - Category tag (default: sms)
    /// - `MODERATION_ATTRIBUTES` - `locality` or `static` (default: locality)
    /// - `MODERATION_STATIC_ATTRIBUTES` - `key=value,...` pairs for the static profile
    /// - `DEFAULT_TIMEZONE` - IANA fallback zone (default: America/Chicago)
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner_number = lookup("OWNER_PHONE_NUMBER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RelayError::Configuration("OWNER_PHONE_NUMBER not set".to_string()))?;

        let moderation_timeout = match lookup("MODERATION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| RelayError::InvalidValue {
                    key: "MODERATION_TIMEOUT_SECS".to_string(),
                    message: format!("{:?} is not a whole number of seconds", raw),
                })?;
                if secs == 0 {
                    return Err(RelayError::InvalidValue {
                        key: "MODERATION_TIMEOUT_SECS".to_string(),
                        message: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_MODERATION_TIMEOUT,
        };

        let category = lookup("MODERATION_CATEGORY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let default_timezone = match lookup("DEFAULT_TIMEZONE") {
            Some(name) => name.trim().parse::<Tz>().map_err(|_| RelayError::InvalidValue {
                key: "DEFAULT_TIMEZONE".to_string(),
                message: format!("unknown timezone {:?}", name),
            })?,
            None => DEFAULT_TIMEZONE,
        };

        let attributes = match lookup("MODERATION_ATTRIBUTES")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("locality") => AttributeProfile::Locality,
            Some("static") => {
                let raw = lookup("MODERATION_STATIC_ATTRIBUTES").unwrap_or_default();
                AttributeProfile::Static(parse_static_attributes(&raw)?)
            }
            Some(other) => {
                return Err(RelayError::InvalidValue {
                    key: "MODERATION_ATTRIBUTES".to_string(),
                    message: format!("expected `locality` or `static`, got {:?}", other),
                })
            }
        };

        Ok(Self {
            owner_number,
            profile: ModerationProfile {
                category,
                attributes,
                default_timezone,
            },
            moderation_timeout,
        })
    }
}

/// Parse `key=value,key=value` into a map. Blank entries are skipped.
fn parse_static_attributes(raw: &str) -> Result<BTreeMap<String, String>, RelayError> {
    let mut attributes = BTreeMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(k, _)| !k.is_empty())
            .ok_or_else(|| RelayError::InvalidValue {
                key: "MODERATION_STATIC_ATTRIBUTES".to_string(),
                message: format!("expected key=value, got {:?}", pair),
            })?;
        attributes.insert(key.to_string(), value.to_string());
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::from_lookup(lookup(&[("OWNER_PHONE_NUMBER", "+15550001111")]))
            .unwrap();
        assert_eq!(config.owner_number, "+15550001111");
        assert_eq!(config.moderation_timeout, DEFAULT_MODERATION_TIMEOUT);
        assert_eq!(config.profile, ModerationProfile::default());
    }

    #[test]
    fn test_missing_owner() {
        let err = RelayConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, RelayError::Configuration(_)));

        let err = RelayConfig::from_lookup(lookup(&[("OWNER_PHONE_NUMBER", "  ")])).unwrap_err();
        assert!(matches!(err, RelayError::Configuration(_)));
    }

    #[test]
    fn test_full_static_profile() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("OWNER_PHONE_NUMBER", "+15550001111"),
            ("MODERATION_TIMEOUT_SECS", "3"),
            ("MODERATION_CATEGORY", "chats"),
            ("MODERATION_ATTRIBUTES", "Static"),
            (
                "MODERATION_STATIC_ATTRIBUTES",
                "user-id=a423jhdf6f, context-id=b45796376dg,",
            ),
            ("DEFAULT_TIMEZONE", "America/New_York"),
        ]))
        .unwrap();

        assert_eq!(config.moderation_timeout, Duration::from_secs(3));
        assert_eq!(config.profile.category, "chats");
        assert_eq!(config.profile.default_timezone, chrono_tz::America::New_York);
        match config.profile.attributes {
            AttributeProfile::Static(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map["user-id"], "a423jhdf6f");
                assert_eq!(map["context-id"], "b45796376dg");
            }
            other => panic!("expected static profile, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_values() {
        let base = ("OWNER_PHONE_NUMBER", "+15550001111");

        for bad in [
            ("MODERATION_TIMEOUT_SECS", "soon"),
            ("MODERATION_TIMEOUT_SECS", "0"),
            ("DEFAULT_TIMEZONE", "Mars/Olympus"),
            ("MODERATION_ATTRIBUTES", "geo"),
        ] {
            let err = RelayConfig::from_lookup(lookup(&[base, bad])).unwrap_err();
            assert!(
                matches!(err, RelayError::InvalidValue { ref key, .. } if key == bad.0),
                "unexpected error for {:?}: {}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_static_attributes_rejects_bare_keys() {
        assert!(parse_static_attributes("user-id").is_err());
        assert!(parse_static_attributes("=value").is_err());
        assert!(parse_static_attributes("").unwrap().is_empty());
    }
}
