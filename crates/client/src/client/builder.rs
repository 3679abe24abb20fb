//! Client builder for constructing [`ActiniaClient`] instances.
//!
//! Responsibilities:
//! - Fluent builder API for client configuration.
//! - Validating the required base URL and normalizing trailing slashes.
//! - Configuring the underlying HTTP client (timeout).
//!
//! # Invariants
//! - `base_url` is required and must parse as a URL.
//! - The base URL never carries a trailing slash after `build()`.
//! - Credentials are attached per request by the dispatcher, never
//!   stored inside the reqwest client.

use std::time::Duration;

use actinia_config::{AuthConfig, Config, constants};
use secrecy::SecretString;

use crate::client::ActiniaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`ActiniaClient`].
///
/// All options have defaults mirroring `actinia-config` except
/// `base_url`, which is required.
pub struct ActiniaClientBuilder {
    base_url: Option<String>,
    api_source: String,
    api_version: String,
    language: String,
    auth: AuthConfig,
    timeout: Duration,
}

impl Default for ActiniaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_source: constants::DEFAULT_API_SOURCE.to_string(),
            api_version: constants::DEFAULT_API_VERSION.to_string(),
            language: constants::DEFAULT_LANGUAGE.to_string(),
            auth: AuthConfig::default(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ActiniaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from a loaded [`Config`].
    pub fn from_config(config: Config) -> Self {
        Self {
            base_url: Some(config.connection.host),
            api_source: config.connection.api_source,
            api_version: config.connection.api_version,
            language: config.connection.language,
            auth: config.auth,
            timeout: config.connection.timeout,
        }
    }

    /// Set the API host URL, including the REST mount path
    /// (e.g., `http://localhost:8005/savana`). Trailing slashes are
    /// removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API source tag.
    pub fn api_source(mut self, source: impl Into<String>) -> Self {
        self.api_source = source.into();
        self
    }

    /// Set the actinia API version tag.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the language for error-context strings.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Attach a bearer token. Replaces any basic-auth credentials.
    pub fn token(mut self, token: SecretString) -> Self {
        self.auth = AuthConfig::with_token(token);
        self
    }

    /// Attach basic-auth credentials. Replaces any bearer token.
    pub fn basic_auth(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.auth = AuthConfig::with_basic_auth(username, password);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidUrl`] when the base URL is missing or not
    /// parseable; [`ClientError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ActiniaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(ActiniaClient {
            http,
            base_url,
            api_source: self.api_source,
            api_version: self.api_version,
            language: self.language,
            auth: self.auth,
        })
    }
}
