//! Error types for the actinia client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// An enumerated server field held a value outside its declared vocabulary.
///
/// Raised while constructing a response model; the construction fails as a
/// whole, no partial model is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Server response {kind} '{value}' is not a valid option")]
pub struct ValidationError {
    /// Which vocabulary was violated: `status`, `type` or `subtype`.
    pub kind: &'static str,
    /// The offending token as received from the server.
    pub value: String,
}

impl ValidationError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors that can occur during actinia client operations.
///
/// Remote processing failures are NOT errors: a syntactically valid
/// non-2xx response is returned as the error model variant of
/// [`crate::endpoints::ApiResponse`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP client construction or low-level transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure during a dispatched request, wrapped with the
    /// route's error-context string.
    #[error("{context} {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the declared model, including
    /// enumerated-field validation failures.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid base URL or unencodable path segment.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An enumerated value failed vocabulary validation outside of
    /// deserialization (e.g., a caller-supplied module family).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// Wrap a transport failure with the route's error-context string.
    pub(crate) fn transport(context: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            context: context.to_string(),
            source,
        }
    }

    /// Check if this error originated below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("status", "dog");
        assert_eq!(
            err.to_string(),
            "Server response status 'dog' is not a valid option"
        );
    }

    #[test]
    fn test_validation_error_propagates_through_client_error() {
        let err: ClientError = ValidationError::new("subtype", "polygon").into();
        assert!(err.to_string().contains("'polygon' is not a valid option"));
        assert!(!err.is_transport());
    }
}
