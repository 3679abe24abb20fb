//! The request dispatcher: one HTTP round trip, one typed result.
//!
//! Every endpoint answers with a body shaped `{ "response": <payload> }`
//! on success and failure alike; the HTTP status decides which model
//! parses `<payload>`. Remote processing failures are therefore data
//! (the [`ApiResponse::Error`] variant), not Rust errors. Transport
//! failures are wrapped with the route's error-context string and always
//! propagated; there is no log-and-swallow path.
//!
//! No retries, no timeout management, no caching: each call is a single
//! best-effort attempt. Cancellation is dropping the returned future.

use actinia_config::AuthConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{ClientError, Result};

/// Outcome of a dispatched call: the declared success model or the
/// declared error model, selected by HTTP status.
#[derive(Debug, Clone)]
pub enum ApiResponse<S, E> {
    Success(S),
    Error(E),
}

impl<S, E> ApiResponse<S, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The success model, discarding an error payload.
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(s) => Some(s),
            Self::Error(_) => None,
        }
    }

    /// The error model, discarding a success payload.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Error(e) => Some(e),
        }
    }
}

/// Request body attached to a dispatched call.
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

/// Wire envelope common to every endpoint.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    response: serde_json::Value,
}

fn apply_auth(builder: RequestBuilder, auth: &AuthConfig) -> RequestBuilder {
    if let Some(token) = &auth.token {
        builder.bearer_auth(token.expose_secret())
    } else if let Some(basic) = &auth.basic {
        builder.basic_auth(&basic.username, Some(basic.password.expose_secret()))
    } else {
        builder
    }
}

/// Perform one HTTP round trip and wrap the `response` payload.
///
/// Query pairs are appended as a standard query string (an empty slice
/// leaves the URL untouched). JSON requests carry
/// `Content-Type: application/json`; multipart bodies set their own
/// boundary header.
///
/// # Errors
///
/// [`ClientError::Transport`] when the network call or body read fails,
/// [`ClientError::InvalidResponse`] when the payload does not match the
/// selected model, including enumerated fields holding tokens outside
/// their vocabulary.
pub async fn dispatch<S, E>(
    client: &Client,
    method: Method,
    url: Url,
    query: &[(&str, String)],
    auth: &AuthConfig,
    body: Option<RequestBody>,
    context: &str,
) -> Result<ApiResponse<S, E>>
where
    S: DeserializeOwned,
    E: DeserializeOwned,
{
    let mut builder = client.request(method.clone(), url.clone());
    if !query.is_empty() {
        builder = builder.query(query);
    }
    builder = match body {
        Some(RequestBody::Json(value)) => builder.json(&value),
        Some(RequestBody::Multipart(form)) => builder.multipart(form),
        None => builder.header(CONTENT_TYPE, "application/json"),
    };
    builder = apply_auth(builder, auth);

    debug!(%method, %url, "dispatching request");

    let response = builder.send().await.map_err(|e| {
        error!(%method, %url, error = %e, "transport failure");
        ClientError::transport(context, e)
    })?;

    let status = response.status();
    let envelope: ResponseEnvelope = response.json().await.map_err(|e| {
        error!(%method, %url, error = %e, "failed to read response body");
        ClientError::transport(context, e)
    })?;

    if status.is_success() {
        serde_json::from_value(envelope.response)
            .map(ApiResponse::Success)
            .map_err(|e| ClientError::InvalidResponse(format!("{context} {e}")))
    } else {
        debug!(%method, %url, status = status.as_u16(), "remote processing error");
        serde_json::from_value(envelope.response)
            .map(ApiResponse::Error)
            .map_err(|e| ClientError::InvalidResponse(format!("{context} {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_accessors() {
        let ok: ApiResponse<u32, String> = ApiResponse::Success(7);
        assert!(ok.is_success());
        assert_eq!(ok.success(), Some(7));

        let err: ApiResponse<u32, String> = ApiResponse::Error("broken".to_string());
        assert!(err.is_error());
        assert_eq!(err.clone().success(), None);
        assert_eq!(err.error(), Some("broken".to_string()));
    }
}
