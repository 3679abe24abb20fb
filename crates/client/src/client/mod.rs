//! Main actinia REST API client and API methods.
//!
//! This module provides the primary [`ActiniaClient`] for talking to an
//! actinia deployment. The client is an explicit value built once and
//! passed around by the caller; there is no global instance.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `locations`: Location management methods
//! - `mapsets`: Mapset management methods
//! - `modules`: Module catalog methods
//! - `layers`: Raster and vector layer methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Response payload parsing (delegated to [`crate::models`])

pub mod builder;

// API method submodules
mod layers;
mod locations;
mod mapsets;
mod modules;

use actinia_config::AuthConfig;

/// Actinia REST API client.
///
/// # Creating a Client
///
/// Use [`ActiniaClient::builder()`]:
///
/// ```rust,ignore
/// use actinia_client::ActiniaClient;
/// use secrecy::SecretString;
///
/// let client = ActiniaClient::builder()
///     .base_url("http://localhost:8005/savana".to_string())
///     .token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// let locations = client.list_locations().await?;
/// ```
///
/// Every API method returns `Result<ApiResponse<S, E>>`: transport and
/// decoding problems are `Err`, remote processing failures are the
/// `ApiResponse::Error` variant.
#[derive(Debug)]
pub struct ActiniaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_source: String,
    pub(crate) api_version: String,
    pub(crate) language: String,
    pub(crate) auth: AuthConfig,
}

impl ActiniaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ActiniaClientBuilder {
        builder::ActiniaClientBuilder::new()
    }

    /// Build a client directly from a loaded configuration.
    pub fn from_config(config: actinia_config::Config) -> crate::error::Result<Self> {
        builder::ActiniaClientBuilder::from_config(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API flavor this client was configured for.
    pub fn api_source(&self) -> &str {
        &self.api_source
    }

    /// The actinia API version tag.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Language code used for error-context strings.
    pub fn language(&self) -> &str {
        &self.language
    }
}
