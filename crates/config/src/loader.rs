//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Read `ACTINIA_*` environment variables into a [`Config`].
//! - Optionally source a `.env` file first (missing files are fine).
//! - Treat empty or whitespace-only variables as unset.
//!
//! Does NOT handle:
//! - Profile files or persistence.
//! - Credential validation (the server does that).
//!
//! Invariants:
//! - Environment variables override the built-in defaults.
//! - Invalid numeric values fail loading instead of being silently dropped.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, BasicAuth, Config, ConnectionConfig};

/// Errors raised while assembling a [`Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The configured host is not a parseable URL.
    #[error("Invalid host URL: {0}")]
    InvalidHost(String),
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loader assembling a [`Config`] from defaults and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    dotenv: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source a `.env` file from the working directory before reading the
    /// environment. A missing file is not an error.
    pub fn with_dotenv(mut self) -> Self {
        self.dotenv = true;
        self
    }

    /// Build the configuration.
    ///
    /// Recognized variables: `ACTINIA_HOST`, `ACTINIA_API_SOURCE`,
    /// `ACTINIA_API_VERSION`, `ACTINIA_LANGUAGE`, `ACTINIA_TIMEOUT`,
    /// `ACTINIA_TOKEN`, `ACTINIA_USERNAME`, `ACTINIA_PASSWORD`.
    pub fn load(self) -> Result<Config, ConfigError> {
        if self.dotenv {
            match dotenvy::dotenv() {
                Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
                Err(e) if e.not_found() => {}
                Err(e) => debug!(error = %e, "Skipping unreadable .env file"),
            }
        }

        let mut connection = ConnectionConfig::default();

        if let Some(host) = env_var_or_none("ACTINIA_HOST") {
            url::Url::parse(&host).map_err(|e| ConfigError::InvalidHost(e.to_string()))?;
            connection.host = host;
        }
        if let Some(source) = env_var_or_none("ACTINIA_API_SOURCE") {
            connection.api_source = source;
        }
        if let Some(version) = env_var_or_none("ACTINIA_API_VERSION") {
            connection.api_version = version;
        }
        if let Some(language) = env_var_or_none("ACTINIA_LANGUAGE") {
            connection.language = language;
        }
        if let Some(timeout) = env_var_or_none("ACTINIA_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ACTINIA_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: "ACTINIA_TIMEOUT".to_string(),
                    message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
                });
            }
            connection.timeout = Duration::from_secs(secs);
        }

        let token = env_var_or_none("ACTINIA_TOKEN")
            .map(|t| SecretString::new(t.into()));
        let username = env_var_or_none("ACTINIA_USERNAME");
        let password = env_var_or_none("ACTINIA_PASSWORD");
        let basic = match (username, password) {
            (Some(username), Some(password)) => Some(BasicAuth {
                username,
                password: SecretString::new(password.into()),
            }),
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "ACTINIA_USERNAME/ACTINIA_PASSWORD".to_string(),
                    message: "both must be set for basic auth".to_string(),
                });
            }
            (None, None) => None,
        };

        Ok(Config {
            connection,
            auth: AuthConfig { token, basic },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    const ALL_VARS: [&str; 8] = [
        "ACTINIA_HOST",
        "ACTINIA_API_SOURCE",
        "ACTINIA_API_VERSION",
        "ACTINIA_LANGUAGE",
        "ACTINIA_TIMEOUT",
        "ACTINIA_TOKEN",
        "ACTINIA_USERNAME",
        "ACTINIA_PASSWORD",
    ];

    fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
        let mut vars: Vec<(String, Option<String>)> = ALL_VARS
            .iter()
            .map(|v| (v.to_string(), None))
            .collect();
        for (k, v) in overrides {
            if let Some(slot) = vars.iter_mut().find(|(name, _)| name == k) {
                slot.1 = Some(v.to_string());
            }
        }
        temp_env::with_vars(vars, f);
    }

    #[test]
    #[serial]
    fn test_load_defaults_with_empty_env() {
        with_clean_env(&[], || {
            let config = ConfigLoader::new().load().unwrap();
            assert_eq!(config.connection.host, "http://localhost:8005/savana");
            assert_eq!(config.connection.language, "en");
            assert!(config.auth.is_anonymous());
        });
    }

    #[test]
    #[serial]
    fn test_load_host_and_token_from_env() {
        with_clean_env(
            &[
                ("ACTINIA_HOST", "https://actinia.example.org/api/v3"),
                ("ACTINIA_TOKEN", "secret-token"),
            ],
            || {
                let config = ConfigLoader::new().load().unwrap();
                assert_eq!(config.connection.host, "https://actinia.example.org/api/v3");
                assert_eq!(
                    config.auth.token.unwrap().expose_secret(),
                    "secret-token"
                );
            },
        );
    }

    #[test]
    #[serial]
    fn test_load_basic_auth_pair() {
        with_clean_env(
            &[
                ("ACTINIA_USERNAME", "grass"),
                ("ACTINIA_PASSWORD", "gis"),
            ],
            || {
                let config = ConfigLoader::new().load().unwrap();
                let basic = config.auth.basic.unwrap();
                assert_eq!(basic.username, "grass");
                assert_eq!(basic.password.expose_secret(), "gis");
            },
        );
    }

    #[test]
    #[serial]
    fn test_load_rejects_half_basic_auth() {
        with_clean_env(&[("ACTINIA_USERNAME", "grass")], || {
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_timeout() {
        with_clean_env(&[("ACTINIA_TIMEOUT", "not-a-number")], || {
            assert!(ConfigLoader::new().load().is_err());
        });
        with_clean_env(&[("ACTINIA_TIMEOUT", "0")], || {
            assert!(ConfigLoader::new().load().is_err());
        });
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_host() {
        with_clean_env(&[("ACTINIA_HOST", "not a url")], || {
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidHost(_)));
        });
    }

    #[test]
    #[serial]
    fn test_whitespace_only_vars_are_unset() {
        with_clean_env(&[("ACTINIA_LANGUAGE", "   ")], || {
            let config = ConfigLoader::new().load().unwrap();
            assert_eq!(config.connection.language, "en");
        });
    }
}
