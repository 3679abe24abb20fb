//! Configuration types for the actinia client.
//!
//! Responsibilities:
//! - Define connection settings (host, API source/version, language, timeout).
//! - Define the credential surface (bearer token, basic auth).
//! - Provide serialization helpers for `Duration` and `SecretString`.
//!
//! Does NOT handle:
//! - Loading from the environment (see `loader`).
//! - Attaching credentials to requests (see the client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` so they never land in logs.
//! - Duration fields are serialized as whole seconds.
//! - `Config::default()` mirrors the development defaults in `constants`.

use crate::constants::{
    DEFAULT_API_HOST, DEFAULT_API_SOURCE, DEFAULT_API_VERSION, DEFAULT_LANGUAGE,
    DEFAULT_TIMEOUT_SECS,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing SecretString as plain strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing `Option<SecretString>` as plain strings.
mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Connection settings for the actinia server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host URL of the API, including the REST mount path
    /// (e.g., `http://localhost:8005/savana`).
    pub host: String,
    /// The API flavor served at `host` (`actinia` or a wrapping service).
    pub api_source: String,
    /// The actinia API version tag.
    pub api_version: String,
    /// Language code used to select error-context strings.
    pub language: String,
    /// Request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            api_source: DEFAULT_API_SOURCE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Basic-auth credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// User credentials attached to outgoing requests.
///
/// Both fields may be unset for anonymous deployments. When both are
/// present the bearer token wins; the dispatcher never validates either.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer access token.
    #[serde(
        with = "opt_secret_string",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<SecretString>,
    /// Basic-auth username/password pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
}

impl AuthConfig {
    /// Credentials consisting of a bearer token only.
    pub fn with_token(token: SecretString) -> Self {
        Self {
            token: Some(token),
            basic: None,
        }
    }

    /// Credentials consisting of a basic-auth pair only.
    pub fn with_basic_auth(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            token: None,
            basic: Some(BasicAuth {
                username: username.into(),
                password,
            }),
        }
    }

    /// True when no credentials are configured.
    pub fn is_anonymous(&self) -> bool {
        self.token.is_none() && self.basic.is_none()
    }
}

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Development defaults with a bearer token attached.
    pub fn with_token(token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::with_token(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_connection_defaults() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.host, "http://localhost:8005/savana");
        assert_eq!(conn.api_version, "4.2.1");
        assert_eq!(conn.language, "en");
        assert_eq!(conn.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_auth_config_default_is_anonymous() {
        assert!(AuthConfig::default().is_anonymous());
    }

    #[test]
    fn test_auth_config_with_token() {
        let auth = AuthConfig::with_token(SecretString::new("abc".to_string().into()));
        assert!(!auth.is_anonymous());
        assert_eq!(auth.token.unwrap().expose_secret(), "abc");
        assert!(auth.basic.is_none());
    }

    #[test]
    fn test_auth_config_with_basic_auth() {
        let auth =
            AuthConfig::with_basic_auth("grass", SecretString::new("gis".to_string().into()));
        let basic = auth.basic.unwrap();
        assert_eq!(basic.username, "grass");
        assert_eq!(basic.password.expose_secret(), "gis");
    }

    #[test]
    fn test_connection_config_serde_round_trip() {
        let conn = ConnectionConfig::default();
        let json = serde_json::to_string(&conn).unwrap();
        let back: ConnectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.host, conn.host);
        assert_eq!(back.timeout, conn.timeout);
    }
}
